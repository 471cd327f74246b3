//! Avatar widget: variant selection, fallback themes, and perimeter status items.

mod component;
mod outline;
mod placement;
mod status_items;
mod text_fit;
mod theme;

pub use component::{
    avatar_container_style, fallback_avatar_class, Avatar, AvatarShape, AvatarVariant,
    DEFAULT_AVATAR_FONT_SIZE_PX, DEFAULT_AVATAR_SIZE_PX,
};
pub use outline::{
    Outline, OutlineDefaults, OutlineSpec, OutlineStyle, AVATAR_OUTLINE_DEFAULTS,
    STATUS_ITEM_OUTLINE_DEFAULTS,
};
pub use placement::{placement_radius, placement_transform, Position, StatusItemTransform};
pub use status_items::{
    status_item_size_and_padding, status_item_style, status_item_text_style, IconAlign,
    StatusItemLayer, StatusItemSpec, StatusItems, STATUS_ITEM_FONT_DIFF_PX,
    STATUS_ITEM_WRAPPER_PADDING_FACTOR,
};
pub use text_fit::{
    is_legible, is_text_candidate, parse_resolved_font_size, settle_visibility, VisibilityMap,
    DEFAULT_STATUS_ITEM_MAX_TEXT_LENGTH, MIN_STATUS_ITEM_FONT_SIZE_PX,
};
pub use theme::{
    resolve_theme_index, theme_index_from_draw, theme_index_from_seed, AvatarTheme,
    AVATAR_THEME_COUNT,
};
