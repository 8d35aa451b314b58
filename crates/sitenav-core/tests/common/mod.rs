//! In-memory page used by the controller tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::time::Duration;

use sitenav_core::{
    ElementQuery, EventResponse, ExternalLink, NavConfig, NavController, NavError, NavEvent,
    NavSurface,
};

/// Index into the fake node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Default)]
struct Node {
    tag: &'static str,
    dom_id: Option<String>,
    parent: Option<NodeId>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct PageState {
    nodes: Vec<Node>,
    body: Option<NodeId>,
    width: f64,
    now: Duration,
    next_timer: u64,
    timers: Vec<(u64, Duration)>,
    fired_settles: usize,
    opened: Vec<(String, String, String)>,
    block_popups: bool,
}

/// Shared handle to an in-memory page. Clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

impl FakePage {
    /// Empty page with only a `<body>`
    pub fn blank(width: f64) -> Self {
        let page = Self::default();
        {
            let mut state = page.state.borrow_mut();
            state.width = width;
            state.nodes.push(Node {
                tag: "body",
                ..Default::default()
            });
            state.body = Some(NodeId(0));
        }
        page
    }

    /// Page carrying the full markup contract
    pub fn full(width: f64) -> (Self, PageIds) {
        let page = Self::blank(width);
        let body = page.body_id().unwrap();
        let header = page.append(body, "header", None, &[]);
        let icon = page.append(header, "i", Some("menu-icon"), &["fa-solid", "fa-bars"]);
        let nav = page.append(header, "ul", None, &["nav-links"]);
        let item = page.append(nav, "li", None, &[]);
        let anchor = page.append(item, "a", None, &[]);
        let main = page.append(body, "main", None, &[]);
        let git = page.append(main, "button", Some("link-git"), &[]);
        let linkedin = page.append(main, "button", Some("link-linkedin"), &[]);
        let visit = page.append(main, "a", None, &["visit-btn"]);
        let paragraph = page.append(main, "p", None, &[]);

        let ids = PageIds {
            body,
            icon,
            nav,
            anchor,
            git,
            linkedin,
            visit,
            paragraph,
        };
        (page, ids)
    }

    pub fn append(
        &self,
        parent: NodeId,
        tag: &'static str,
        dom_id: Option<&str>,
        classes: &[&str],
    ) -> NodeId {
        let mut state = self.state.borrow_mut();
        state.nodes.push(Node {
            tag,
            dom_id: dom_id.map(str::to_string),
            parent: Some(parent),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: BTreeMap::new(),
        });
        NodeId(state.nodes.len() - 1)
    }

    /// Parentless node that is not the body
    pub fn append_root(&self, tag: &'static str) -> NodeId {
        let mut state = self.state.borrow_mut();
        state.nodes.push(Node {
            tag,
            ..Default::default()
        });
        NodeId(state.nodes.len() - 1)
    }

    pub fn body_id(&self) -> Option<NodeId> {
        self.state.borrow().body
    }

    pub fn set_width(&self, width: f64) {
        self.state.borrow_mut().width = width;
    }

    pub fn block_popups(&self) {
        self.state.borrow_mut().block_popups = true;
    }

    pub fn classes(&self, node: NodeId) -> BTreeSet<String> {
        self.state.borrow().nodes[node.0].classes.clone()
    }

    pub fn has(&self, node: NodeId, class: &str) -> bool {
        self.state.borrow().nodes[node.0].classes.contains(class)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.state.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    /// Snapshot of every class and attribute on the page
    pub fn snapshot(&self) -> Vec<(BTreeSet<String>, BTreeMap<String, String>)> {
        self.state
            .borrow()
            .nodes
            .iter()
            .map(|n| (n.classes.clone(), n.attributes.clone()))
            .collect()
    }

    pub fn opened(&self) -> Vec<(String, String, String)> {
        self.state.borrow().opened.clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn fired_settles(&self) -> usize {
        self.state.borrow().fired_settles
    }

    pub fn tag(&self, node: NodeId) -> &'static str {
        self.state.borrow().nodes[node.0].tag
    }

    fn ancestors_or_self(&self, node: NodeId) -> Vec<NodeId> {
        let state = self.state.borrow();
        let mut chain = vec![node];
        let mut current = state.nodes[node.0].parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = state.nodes[parent.0].parent;
        }
        chain
    }

    /// Advance the clock, returning how many settle timers came due
    fn advance_clock(&self, by: Duration) -> usize {
        let mut state = self.state.borrow_mut();
        state.now += by;
        let now = state.now;
        let before = state.timers.len();
        state.timers.retain(|(_, due)| *due > now);
        let due = before - state.timers.len();
        state.fired_settles += due;
        due
    }
}

/// Node ids of the markup built by [`FakePage::full`]
#[derive(Debug, Clone, Copy)]
pub struct PageIds {
    pub body: NodeId,
    pub icon: NodeId,
    pub nav: NodeId,
    pub anchor: NodeId,
    pub git: NodeId,
    pub linkedin: NodeId,
    pub visit: NodeId,
    pub paragraph: NodeId,
}

impl NavSurface for FakePage {
    type Element = NodeId;
    type Timer = u64;

    fn lookup(&self, query: &ElementQuery) -> Option<NodeId> {
        let state = self.state.borrow();
        let position = match query {
            ElementQuery::Id(id) => state
                .nodes
                .iter()
                .position(|n| n.dom_id.as_deref() == Some(id.as_str())),
            ElementQuery::Selector(selector) => {
                let class = selector.strip_prefix('.')?;
                state.nodes.iter().position(|n| n.classes.contains(class))
            }
        };
        position.map(NodeId)
    }

    fn body(&self) -> Option<NodeId> {
        self.state.borrow().body
    }

    fn viewport_width(&self) -> f64 {
        self.state.borrow().width
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.has(*element, class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[element.0]
            .classes
            .insert(class.to_string());
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[element.0].classes.remove(class);
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.state.borrow_mut().nodes[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn contains(&self, ancestor: &NodeId, target: &NodeId) -> bool {
        self.ancestors_or_self(*target).contains(ancestor)
    }

    fn open_external(&self, url: &str, target: &str, features: &str) -> Result<(), NavError> {
        let mut state = self.state.borrow_mut();
        if state.block_popups {
            return Err(NavError::OpenWindow {
                url: url.to_string(),
                message: "popup blocked".to_string(),
            });
        }
        state
            .opened
            .push((url.to_string(), target.to_string(), features.to_string()));
        Ok(())
    }

    fn schedule_settle(&self, delay: Duration) -> Result<u64, NavError> {
        let mut state = self.state.borrow_mut();
        state.next_timer += 1;
        let handle = state.next_timer;
        let due = state.now + delay;
        state.timers.push((handle, due));
        Ok(handle)
    }

    fn cancel_settle(&self, timer: u64) {
        self.state.borrow_mut().timers.retain(|(h, _)| *h != timer);
    }
}

/// Controller over a page, plus the listener wiring `sitenav-web` performs
pub struct Harness {
    pub page: FakePage,
    pub controller: NavController<FakePage>,
}

impl Harness {
    pub fn new(page: FakePage) -> Self {
        let controller = NavController::new(page.clone(), NavConfig::default());
        controller.initialize();
        Self { page, controller }
    }

    /// Simulate a click on `target`: element listeners first, then the
    /// document listener unless propagation was stopped.
    pub fn click(&mut self, target: NodeId) -> EventResponse {
        let chain = self.page.ancestors_or_self(target);
        let elements = self.controller.elements().clone();
        let mut response = EventResponse::PASS;

        for node in &chain {
            if Some(*node) == elements.menu_icon {
                response = response.merge(self.controller.handle(NavEvent::MenuIconClick));
            }
            if self.page.tag(*node) == "a" && self.in_nav(*node) {
                response = response.merge(self.controller.handle(NavEvent::NavAnchorClick));
            }
            if let Some(link) = self.link_for(*node) {
                let link_response = self.controller.handle(NavEvent::ExternalLinkClick(link));
                response = response.merge(link_response);
            }
            if response.stop_propagation {
                return response;
            }
        }

        response.merge(self.controller.handle(NavEvent::DocumentClick {
            target: Some(target),
        }))
    }

    pub fn key(&mut self, key: &str) {
        self.controller.handle(NavEvent::key_down(key));
    }

    pub fn resize(&mut self, width: f64) {
        self.page.set_width(width);
        self.controller.handle(NavEvent::Resize);
    }

    /// Let `ms` milliseconds pass, firing any settle checks that come due
    pub fn advance(&mut self, ms: u64) {
        let due = self.page.advance_clock(Duration::from_millis(ms));
        for _ in 0..due {
            self.controller.handle(NavEvent::ResizeSettled);
        }
    }

    fn in_nav(&self, node: NodeId) -> bool {
        match self.controller.elements().nav_links {
            Some(nav) => self.page.contains(&nav, &node),
            None => false,
        }
    }

    fn link_for(&self, node: NodeId) -> Option<ExternalLink> {
        self.controller
            .config()
            .links
            .iter()
            .find(|binding| self.page.lookup(&binding.query) == Some(node))
            .map(|binding| binding.link)
    }
}
