use serde::Serialize;

/// Split direction of a container.
///
/// `Horizontal` places children left to right, `Vertical` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

impl SplitDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// `split-window` flag producing this direction.
    pub fn split_flag(&self) -> &'static str {
        match self {
            Self::Horizontal => "-h",
            Self::Vertical => "-v",
        }
    }
}

impl std::fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf of the layout tree: one terminal pane.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaneSpec {
    pub name: Option<String>,
    pub command: Option<String>,
    pub focus: bool,
}

impl PaneSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_focus(mut self) -> Self {
        self.focus = true;
        self
    }

    /// Name used for the pane title, if it is non-empty.
    pub fn title(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Startup command, if it is non-empty. Whitespace-only commands are kept.
    pub fn startup_command(&self) -> Option<&str> {
        self.command.as_deref().filter(|command| !command.is_empty())
    }
}

/// Internal node of the layout tree: a split into ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    pub direction: SplitDirection,
    pub panes: Vec<LayoutNode>,
    /// Relative size weights, one per child. Need not sum to 100.
    pub ratio: Option<Vec<f64>>,
    pub focus: bool,
}

impl ContainerSpec {
    pub fn new(direction: SplitDirection, panes: Vec<LayoutNode>) -> Self {
        Self {
            direction,
            panes,
            ratio: None,
            focus: false,
        }
    }

    pub fn horizontal(panes: Vec<LayoutNode>) -> Self {
        Self::new(SplitDirection::Horizontal, panes)
    }

    pub fn vertical(panes: Vec<LayoutNode>) -> Self {
        Self::new(SplitDirection::Vertical, panes)
    }

    pub fn with_ratio(mut self, ratio: Vec<f64>) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn with_focus(mut self) -> Self {
        self.focus = true;
        self
    }

    /// Number of leaf panes below this container, at any depth.
    pub fn pane_count(&self) -> usize {
        self.panes.iter().map(LayoutNode::pane_count).sum()
    }
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Pane(PaneSpec),
    Container(ContainerSpec),
}

impl LayoutNode {
    pub fn pane_count(&self) -> usize {
        match self {
            LayoutNode::Pane(_) => 1,
            LayoutNode::Container(container) => container.pane_count(),
        }
    }

    pub fn focus(&self) -> bool {
        match self {
            LayoutNode::Pane(pane) => pane.focus,
            LayoutNode::Container(container) => container.focus,
        }
    }
}

impl From<PaneSpec> for LayoutNode {
    fn from(pane: PaneSpec) -> Self {
        LayoutNode::Pane(pane)
    }
}

impl From<ContainerSpec> for LayoutNode {
    fn from(container: ContainerSpec) -> Self {
        LayoutNode::Container(container)
    }
}

/// Root of a layout description: one tmux window.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub name: Option<String>,
    pub layout: ContainerSpec,
}

impl LayoutSpec {
    pub fn new(layout: ContainerSpec) -> Self {
        Self { name: None, layout }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pane_count(&self) -> usize {
        self.layout.pane_count()
    }
}

/// One tmux command produced by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledCommand {
    pub text: String,
    pub description: String,
}

impl CompiledCommand {
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
        }
    }
}
