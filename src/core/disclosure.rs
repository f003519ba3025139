//! Two-state toggle for the exact factorial value.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disclosure {
    #[default]
    Hidden,
    Shown,
}

impl Disclosure {
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Disclosure::Hidden => Disclosure::Shown,
            Disclosure::Shown => Disclosure::Hidden,
        };
        *self
    }

    pub fn is_shown(self) -> bool {
        self == Disclosure::Shown
    }
}
