mod auth_form;
mod buttons;
mod input;

pub use auth_form::AuthForm;
pub use buttons::{AuthSocialButton, Button, ButtonStyle, ButtonType, Glyph, Icon};
pub use input::Input;
