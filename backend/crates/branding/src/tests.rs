//! Unit tests for the branding crate

#[cfg(test)]
mod use_case_tests {
    use crate::application::resolve::ResolveBrandingUseCase;
    use crate::domain::BrandingSettings;
    use crate::error::BrandingError;
    use std::sync::Arc;

    #[test]
    fn test_resolves_known_screen() {
        let use_case = ResolveBrandingUseCase::new(Arc::new(BrandingSettings::default()));

        let branding = use_case.execute("collector-register").unwrap();
        assert_eq!(branding.title, "Registro de COPERO");
    }

    #[test]
    fn test_rejects_unknown_screen() {
        let use_case = ResolveBrandingUseCase::new(Arc::new(BrandingSettings::default()));

        assert!(matches!(
            use_case.execute("Welcome"),
            Err(BrandingError::UnknownScreen(_))
        ));
    }
}

#[cfg(test)]
mod load_tests {
    use crate::application::load::load_settings;
    use crate::domain::Screen;
    use crate::error::BrandingError;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("branding-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let settings = load_settings(temp_path("does-not-exist.json")).await.unwrap();

        assert_eq!(settings.template(), "Default");
        assert_eq!(settings.resolve(Screen::Welcome).title, "Bienvenido");
    }

    #[tokio::test]
    async fn test_loads_document_from_disk() {
        let path = temp_path("settings.json");
        tokio::fs::write(
            &path,
            r#"{"currentTemplate":"Banempre","Banempre":{"Customization":{"settings":{"theme":"dark"}}}}"#,
        )
        .await
        .unwrap();

        let settings = load_settings(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(settings.template(), "Banempre");
        assert_eq!(settings.resolve(Screen::Chat).theme, "dark");
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let path = temp_path("broken.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let result = load_settings(&path).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(matches!(result, Err(BrandingError::InvalidDocument(_))));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::domain::BrandingSettings;
    use crate::presentation::router::branding_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(settings: BrandingSettings, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = branding_router(settings)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_screen_branding_json() {
        let settings = BrandingSettings::from_json(
            r#"{"currentTemplate":"Lotto","Lotto":{"Customization":{"settings":{"image":{"src":"/logo.avif"}}}}}"#,
        )
        .unwrap();

        let (status, body) = get_json(settings, "/register").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["screen"], "register");
        assert_eq!(body["template"], "Lotto");
        assert_eq!(body["title"], "Registro");
        assert_eq!(body["subtitle"], "Completa tus datos");
        assert_eq!(body["imageSrc"], "/logo.avif");
        assert_eq!(body["theme"], "light");
    }

    #[tokio::test]
    async fn test_unknown_screen_is_not_found() {
        let (status, body) = get_json(BrandingSettings::default(), "/settings").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::BrandingError;
    use axum::http::StatusCode;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            BrandingError::UnknownScreen("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );

        let invalid = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BrandingError::InvalidDocument(invalid);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::InternalServerError);
        assert_eq!(app.message(), "Branding settings are unavailable");
    }

    #[test]
    fn test_read_failure_keeps_io_error_as_source() {
        use std::error::Error;

        let err = BrandingError::Read {
            path: "/etc/lotto/settings.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let app: AppError = err.into();
        let source = app.source().unwrap();
        assert_eq!(source.to_string(), "denied");
        assert!(!app.message().contains("/etc/lotto"));
    }
}
