#![forbid(unsafe_code)]

use std::fmt;

/// Errors surfaced while rendering a tooltip.
///
/// These are usage errors; nothing here is shown to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipError {
    /// A tooltip wraps exactly one anchor.
    ChildCount { found: usize },
}

impl fmt::Display for TooltipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildCount { found } => {
                write!(f, "tooltip expects exactly one anchor child, found {found}")
            }
        }
    }
}

impl std::error::Error for TooltipError {}

/// Take the single item out of `children`, failing on zero or several.
pub fn only_child<I: IntoIterator>(children: I) -> Result<I::Item, TooltipError> {
    let mut iter = children.into_iter();
    let Some(first) = iter.next() else {
        return Err(TooltipError::ChildCount { found: 0 });
    };
    let extra = iter.count();
    if extra > 0 {
        return Err(TooltipError::ChildCount { found: 1 + extra });
    }
    Ok(first)
}
