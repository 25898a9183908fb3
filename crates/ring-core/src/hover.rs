/// Dims every card except the hovered one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverDimmer {
    hover_opacity: f64,
    hovered: Option<usize>,
}

impl HoverDimmer {
    pub fn new(hover_opacity: f64) -> Self {
        Self {
            hover_opacity,
            hovered: None,
        }
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Returns whether any opacity changed.
    pub fn start(&mut self, index: usize) -> bool {
        let changed = self.hovered != Some(index);
        self.hovered = Some(index);
        changed
    }

    pub fn end(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    pub fn opacity(&self, index: usize) -> f64 {
        match self.hovered {
            Some(h) if h != index => self.hover_opacity,
            _ => 1.0,
        }
    }
}
