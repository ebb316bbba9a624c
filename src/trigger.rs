//! Visibility trigger bookkeeping.
//!
//! A [`TriggerSet`] tracks which nodes are observed and whether each was last
//! seen inside the viewport. Feeding it intersection samples yields the
//! crossings a callback should receive. One-shot sets drop a node the moment
//! it first enters, so later samples for that node are ignored and the host
//! can unobserve it.
//!
//! The browser observer itself lives in `web::observer`; this module owns the
//! decisions so they can be exercised without a viewport.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

/// Observation parameters for one set of nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the node's area that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// Bottom root margin in pixels; negative values trigger later.
    pub root_margin_bottom_px: f64,
    /// Stop observing a node after it first enters.
    pub once: bool,
}

impl VisibilityOptions {
    #[must_use]
    pub fn once(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), root_margin_bottom_px: 0.0, once: true }
    }

    #[must_use]
    pub fn repeating(threshold: f64) -> Self {
        Self { once: false, ..Self::once(threshold) }
    }

    #[must_use]
    pub fn with_bottom_margin(mut self, px: f64) -> Self {
        self.root_margin_bottom_px = px;
        self
    }

    /// CSS-style root margin string (`top right bottom left`).
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_bottom_px)
    }
}

/// Direction of a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Leave,
}

#[derive(Clone, Debug)]
struct Observed<N> {
    node: N,
    visible: bool,
}

/// Observed nodes and their last known visibility.
#[derive(Clone, Debug)]
pub struct TriggerSet<N> {
    options: VisibilityOptions,
    observed: Vec<Observed<N>>,
}

impl<N: Clone + PartialEq> TriggerSet<N> {
    #[must_use]
    pub fn new(options: VisibilityOptions) -> Self {
        Self { options, observed: Vec::new() }
    }

    #[must_use]
    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    /// Start observing `node`. Returns `false` if it was already observed.
    pub fn observe(&mut self, node: N) -> bool {
        if self.is_observing(&node) {
            return false;
        }
        self.observed.push(Observed { node, visible: false });
        true
    }

    pub fn unobserve(&mut self, node: &N) {
        self.observed.retain(|o| o.node != *node);
    }

    #[must_use]
    pub fn is_observing(&self, node: &N) -> bool {
        self.observed.iter().any(|o| o.node == *node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Feed one intersection sample for `node`.
    ///
    /// Returns the crossing to report, if any. Unobserved nodes never report.
    pub fn sample(&mut self, node: &N, ratio: f64, intersecting: bool) -> Option<Crossing> {
        let threshold = self.options.threshold;
        let once = self.options.once;
        let pos = self.observed.iter().position(|o| o.node == *node)?;

        let now_visible = intersecting && ratio >= threshold;
        let entry = &mut self.observed[pos];
        let crossing = match (entry.visible, now_visible) {
            (false, true) => Crossing::Enter,
            (true, false) => Crossing::Leave,
            _ => return None,
        };
        entry.visible = now_visible;

        if once {
            if crossing == Crossing::Leave {
                return None;
            }
            self.observed.remove(pos);
        }
        Some(crossing)
    }

    /// Feed a batch of samples, preserving their order.
    pub fn sample_all<I>(&mut self, samples: I) -> Vec<(N, Crossing)>
    where
        I: IntoIterator<Item = (N, f64, bool)>,
    {
        samples
            .into_iter()
            .filter_map(|(node, ratio, intersecting)| {
                self.sample(&node, ratio, intersecting).map(|c| (node, c))
            })
            .collect()
    }

    /// Report every observed node as entered.
    ///
    /// Used when no viewport-intersection primitive exists: everything is
    /// treated as visible at initialization.
    pub fn enter_all(&mut self) -> Vec<N> {
        let nodes: Vec<N> = self.observed.iter().map(|o| o.node.clone()).collect();
        if self.options.once {
            self.observed.clear();
        } else {
            for o in &mut self.observed {
                o.visible = true;
            }
        }
        nodes
    }
}
