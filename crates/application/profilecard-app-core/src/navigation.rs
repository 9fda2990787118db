use profilecard_core::Route;

use crate::domain::{NavFrame, ViewId};

/// Back stack of mounted views. The root frame is always the users list and
/// can never be popped.
#[derive(Debug, Clone)]
pub struct Router {
    root: NavFrame,
    stack: Vec<NavFrame>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            root: NavFrame::new(Route::UsersList),
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current_frame().route
    }

    pub fn current_frame(&self) -> &NavFrame {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn root_frame(&self) -> &NavFrame {
        &self.root
    }

    pub fn navigate_to(&mut self, route: Route) -> NavFrame {
        let frame = NavFrame::new(route);
        self.push(frame);
        frame
    }

    pub fn push(&mut self, frame: NavFrame) {
        self.stack.push(frame);
    }

    /// Pops the top frame. At the root this is a no-op and returns `None`.
    pub fn navigate_back(&mut self) -> Option<NavFrame> {
        self.stack.pop()
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        1 + self.stack.len()
    }

    pub fn frames(&self) -> impl Iterator<Item = &NavFrame> {
        std::iter::once(&self.root).chain(self.stack.iter())
    }

    pub fn is_mounted(&self, view_id: ViewId) -> bool {
        self.frames().any(|f| f.view_id == view_id)
    }
}
