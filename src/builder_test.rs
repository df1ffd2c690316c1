use super::*;

mod options {
    use super::*;

    #[test]
    fn should_equal_defaults_when_nothing_overridden() {
        // Arrange & Act
        let options = CorsBuilder::new().options().expect("valid options");

        // Assert
        assert_eq!(options, CorsOptions::default());
    }

    #[test]
    fn should_apply_overrides_over_defaults() {
        // Arrange
        let builder = CorsBuilder::new()
            .origin("https://app.example")
            .allowed_headers(["X-Api-Key"])
            .credentials(true)
            .max_age(120)
            .expressify(false);

        // Act
        let options = builder.options().expect("valid options");

        // Assert
        assert_eq!(options.origin, Origin::exact("https://app.example"));
        assert_eq!(options.allowed_headers, AllowedHeaders::list(["X-Api-Key"]));
        assert!(options.credentials);
        assert_eq!(options.max_age, 120);
        assert_eq!(options.calling_convention, CallingConvention::Context);
        assert_eq!(options.methods, AllowedMethods::default());
        assert!(options.exposed_headers.is_empty());
    }

    #[test]
    fn should_normalize_list_options_to_joined_values() {
        // Arrange & Act
        let options = CorsBuilder::new()
            .methods(["GET", "POST"])
            .exposed_headers(["X-Trace", "X-Span"])
            .options()
            .expect("valid options");

        // Assert
        assert_eq!(options.methods.header_value().as_deref(), Some("GET,POST"));
        assert_eq!(
            options.exposed_headers.header_value().as_deref(),
            Some("X-Trace,X-Span")
        );
    }

    #[test]
    fn should_fail_fast_when_override_is_invalid() {
        // Arrange & Act
        let result = CorsBuilder::new().exposed_headers(["bad header"]).options();

        // Assert
        assert_eq!(
            result,
            Err(ValidationError::InvalidHeaderName("bad header".into()))
        );
    }
}

mod build {
    use super::*;

    #[test]
    fn should_return_cors_carrying_merged_options() {
        // Arrange & Act
        let cors = CorsBuilder::new()
            .origin(Origin::any())
            .build()
            .expect("valid CORS configuration");

        // Assert
        assert_eq!(cors.options().origin, Origin::any());
    }
}
