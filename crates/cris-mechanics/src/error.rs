//! Error types for the mechanics crate.
//!
//! The pure rollers never fail. These errors come from the data layer
//! around them: loading and patching sheets, and resolving rolls by name.

/// Errors that can occur outside the pure roll engine.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An attribute code is not one of FOR, AGI, INT, PRE, VIG.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// No skill with this name exists on the sheet.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// No attack with this name or id exists on the sheet.
    #[error("unknown attack: {0}")]
    UnknownAttack(String),

    /// An attack index is past the end of the attack list.
    #[error("attack index {index} out of bounds ({len} attacks)")]
    AttackIndex {
        /// The requested index.
        index: usize,
        /// Number of attacks on the sheet.
        len: usize,
    },

    /// A dice expression given to the strict roller is malformed.
    #[error("invalid dice expression '{0}' (expected e.g. 2d6+1)")]
    InvalidExpression(String),

    /// A patch could not be applied to a sheet.
    #[error("invalid patch: {0}")]
    InvalidPatch(String),

    /// Sheet JSON could not be read or written.
    #[error("sheet json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
