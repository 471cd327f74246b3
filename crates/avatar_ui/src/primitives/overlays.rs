use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the trigger the tooltip popover opens on.
pub enum TooltipPlacement {
    /// Above the trigger.
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
    /// Inline-start side (left in ltr).
    Start,
    /// Inline-end side (right in ltr).
    End,
}

impl TooltipPlacement {
    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Tooltip configuration.
pub struct TooltipConfig {
    /// Popover text.
    pub content: String,
    /// Popover placement.
    pub placement: TooltipPlacement,
    /// Popover element id, referenced by the trigger's `aria-describedby`.
    pub id: Option<String>,
}

impl TooltipConfig {
    /// Top-placed tooltip showing `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Sets the placement.
    pub fn placement(mut self, placement: TooltipPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the popover id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Wraps `child` with `wrapper` only when `condition` holds; otherwise returns `child` untouched.
pub fn wrap_if<T>(condition: bool, child: T, wrapper: impl FnOnce(T) -> T) -> T {
    wrap_with(condition.then_some(()), child, |(), child| wrapper(child))
}

/// Wraps `child` using `config` when present; otherwise returns `child` untouched.
pub fn wrap_with<C, T>(config: Option<C>, child: T, wrapper: impl FnOnce(C, T) -> T) -> T {
    match config {
        Some(config) => wrapper(config, child),
        None => child,
    }
}

#[component]
/// Hover/focus tooltip trigger region with an attached popover.
pub fn Tooltip(
    config: TooltipConfig,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let TooltipConfig {
        content,
        placement,
        id,
    } = config;

    view! {
        <span
            class=merge_layout_class("ui-tooltip-trigger", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip-trigger"
            aria-describedby=id.clone()
            on:mouseenter=move |_| open.set(true)
            on:mouseleave=move |_| open.set(false)
            on:focusin=move |_| open.set(true)
            on:focusout=move |_| open.set(false)
        >
            {children()}
            <span
                class="ui-tooltip"
                id=id
                role="tooltip"
                data-ui-primitive="true"
                data-ui-kind="tooltip"
                data-ui-placement=placement.token()
                data-ui-open=move || bool_token(open.get())
                hidden=move || !open.get()
            >
                {content}
            </span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Node {
        Text(&'static str),
        Element(&'static str, Vec<Node>),
    }

    fn element_count(node: &Node) -> usize {
        match node {
            Node::Text(_) => 0,
            Node::Element(_, children) => 1 + children.iter().map(element_count).sum::<usize>(),
        }
    }

    fn avatar() -> Node {
        Node::Element("div", vec![Node::Text("AB")])
    }

    #[test]
    fn skipped_wrapper_adds_no_nodes() {
        let rendered = wrap_if(false, avatar(), |child| Node::Element("span", vec![child]));
        assert_eq!(rendered, avatar());
        assert_eq!(element_count(&rendered), 1);
    }

    #[test]
    fn applied_wrapper_adds_exactly_one_layer() {
        let rendered = wrap_with(Some("tooltip"), avatar(), |tag, child| {
            Node::Element(tag, vec![child])
        });
        assert_eq!(rendered, Node::Element("tooltip", vec![avatar()]));
        assert_eq!(element_count(&rendered), 2);
    }

    #[test]
    fn tooltip_config_builder_keeps_defaults() {
        let config = TooltipConfig::new("Ada Lovelace").id("avatar-tip");
        assert_eq!(config.placement, TooltipPlacement::Top);
        assert_eq!(config.id.as_deref(), Some("avatar-tip"));
    }
}
