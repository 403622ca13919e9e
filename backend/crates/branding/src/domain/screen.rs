//! Screens that display branding, and their built-in defaults

use derive_more::Display;
use std::str::FromStr;

use crate::error::BrandingError;

pub const DEFAULT_IMAGE_SRC: &str = "/lotto.avif";
pub const DEFAULT_THEME: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Screen {
    #[display("welcome")]
    Welcome,
    #[display("register")]
    Register,
    #[display("collector-register")]
    CollectorRegister,
    #[display("admin")]
    Admin,
    #[display("chat")]
    Chat,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Welcome,
        Screen::Register,
        Screen::CollectorRegister,
        Screen::Admin,
        Screen::Chat,
    ];

    pub const fn default_title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Bienvenido",
            Screen::Register => "Registro",
            Screen::CollectorRegister => "Registro de COPERO",
            Screen::Admin => "Admin",
            Screen::Chat => "Chat",
        }
    }

    pub const fn default_subtitle(&self) -> &'static str {
        match self {
            Screen::Welcome => "Registrate para participar",
            Screen::Register => "Completa tus datos",
            Screen::CollectorRegister => "Completa tus datos para registrarte como COPERO",
            Screen::Admin => "Panel",
            Screen::Chat => "Consulta",
        }
    }
}

impl FromStr for Screen {
    type Err = BrandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.to_string() == s)
            .ok_or_else(|| BrandingError::UnknownScreen(s.to_string()))
    }
}
