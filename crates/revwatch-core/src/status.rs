// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Status catalog: the closed set of review statuses and their verdict text.

use strum::{Display, EnumIter, EnumString};

/// Review status of a submitted homework, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Looks up a wire status code. `None` for anything outside the catalog.
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// Human-readable verdict sent to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
