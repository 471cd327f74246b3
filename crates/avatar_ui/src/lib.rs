//! Avatar UI primitives for Leptos applications.
//!
//! The crate renders profile avatars in three variants (image, icon, themed fallback) and
//! places status item badges around the avatar perimeter at eight compass positions. Badge
//! geometry mirrors under right-to-left reading direction, and badge text that would render
//! below a legible size is hidden after layout. Every rendered node carries the stable
//! `data-ui-*` contract consumed by the shared CSS layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod avatar;
mod direction;
mod icon;
mod length;
mod primitives;

pub use avatar::*;
pub use direction::{provide_reading_direction, use_reading_direction, ReadingDirection};
pub use icon::{Icon, IconName, IconSize, IconSpec};
pub use length::{Length, LengthParseError};
pub use primitives::{wrap_if, wrap_with, Tooltip, TooltipConfig, TooltipPlacement};

/// Convenience imports for application crates rendering avatars.
pub mod prelude {
    pub use crate::{
        provide_reading_direction, wrap_if, wrap_with, Avatar, AvatarShape, AvatarTheme, Icon,
        IconAlign, IconName, IconSize, IconSpec, Length, OutlineSpec, OutlineStyle, Position,
        ReadingDirection, StatusItemSpec, StatusItems, Tooltip, TooltipConfig, TooltipPlacement,
    };
}
