/// Source of the `Access-Control-Allow-Origin` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    /// Echo the request's `Origin` header verbatim.
    #[default]
    Mirror,
    /// Emit the configured value for every cross-origin request.
    Exact(String),
}

impl Origin {
    pub fn mirror() -> Self {
        Self::Mirror
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    /// `Access-Control-Allow-Origin: *`.
    pub fn any() -> Self {
        Self::Exact("*".to_string())
    }

    pub fn resolve<'a>(&'a self, request_origin: &'a str) -> &'a str {
        match self {
            Origin::Mirror => request_origin,
            Origin::Exact(value) => value,
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Exact(value.to_owned())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Exact(value)
    }
}

impl<T: Into<Origin>> From<Option<T>> for Origin {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
