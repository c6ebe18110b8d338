//! Declarative description of an entrance animation: which elements move,
//! from what style to what style, and when relative to each other.
//!
//! Everything in this module is plain data so the scheduling math can be
//! exercised without a browser.

/// Subset of style properties the entrance animations drive. Unset fields are
/// left alone on the element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleProps {
    pub opacity: Option<f64>,
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub scale: Option<f64>,
    pub rotate_y: Option<f64>,
    pub blur: Option<f64>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.translate_x = Some(px);
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.translate_y = Some(px);
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }

    pub fn rotate_y(mut self, degrees: f64) -> Self {
        self.rotate_y = Some(degrees);
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.blur = Some(px);
        self
    }

    /// Renders the declared properties as an inline style string.
    pub fn css(&self) -> String {
        let mut out = String::new();
        if let Some(opacity) = self.opacity {
            out.push_str(&format!("opacity: {};", opacity));
        }
        let mut transform = String::new();
        if self.translate_x.is_some() || self.translate_y.is_some() {
            transform.push_str(&format!(
                " translate({}px, {}px)",
                self.translate_x.unwrap_or(0.0),
                self.translate_y.unwrap_or(0.0)
            ));
        }
        if let Some(scale) = self.scale {
            transform.push_str(&format!(" scale({})", scale));
        }
        if let Some(degrees) = self.rotate_y {
            transform.push_str(&format!(" rotateY({}deg)", degrees));
        }
        if !transform.is_empty() {
            out.push_str(&format!(" transform:{};", transform));
        }
        if let Some(blur) = self.blur {
            out.push_str(&format!(" filter: blur({}px);", blur));
        }
        out.trim().to_string()
    }
}

/// Timing curves used across the page. `css()` is what the browser runs,
/// `eval()` is the same curve for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    SoftOut,
    /// Cubic ease-out, the default for most groups.
    EaseOut,
    /// Ease-out with a slight overshoot past the final value.
    BackOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::SoftOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::EaseOut => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    pub fn eval(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SoftOut => 1.0 - (1.0 - t).powi(2),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Where a group starts relative to the rest of the sequence. Negative
/// offsets pull a group forward so it overlaps its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Seconds after the timeline starts.
    FromStart(f64),
    /// Seconds after the previous group starts.
    AfterPrevStart(f64),
    /// Seconds after the previous group ends (stagger tail included).
    AfterPrevEnd(f64),
}

/// One set of elements sharing a transition. The tag is matched against
/// `data-reveal` attributes under the section root.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub tag: &'static str,
    pub from: StyleProps,
    pub to: StyleProps,
    pub duration: f64,
    pub stagger: f64,
    pub offset: Offset,
    pub easing: Easing,
}

impl Group {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            from: StyleProps::default(),
            to: StyleProps::default(),
            duration: 0.6,
            stagger: 0.0,
            offset: Offset::FromStart(0.0),
            easing: Easing::EaseOut,
        }
    }

    pub fn from_style(mut self, props: StyleProps) -> Self {
        self.from = props;
        self
    }

    pub fn to_style(mut self, props: StyleProps) -> Self {
        self.to = props;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn at(mut self, seconds: f64) -> Self {
        self.offset = Offset::FromStart(seconds);
        self
    }

    pub fn after_prev_start(mut self, seconds: f64) -> Self {
        self.offset = Offset::AfterPrevStart(seconds);
        self
    }

    pub fn after_prev_end(mut self, seconds: f64) -> Self {
        self.offset = Offset::AfterPrevEnd(seconds);
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// An ordered sequence of groups with relative offsets between them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    pub groups: Vec<Group>,
    pub delay: f64,
}

impl Timeline {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups, delay: 0.0 }
    }

    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    /// Absolute start time of every group, given how many elements each group
    /// matched. A group's end covers its stagger tail, so `AfterPrevEnd`
    /// waits for the last staggered element of the previous group.
    pub fn schedule(&self, counts: &[usize]) -> Vec<f64> {
        let mut starts = Vec::with_capacity(self.groups.len());
        let mut prev_start = self.delay;
        let mut prev_end = self.delay;
        for (index, group) in self.groups.iter().enumerate() {
            let start = match group.offset {
                Offset::FromStart(d) => self.delay + d,
                Offset::AfterPrevStart(d) => prev_start + d,
                Offset::AfterPrevEnd(d) => prev_end + d,
            }
            .max(0.0);
            let count = counts.get(index).copied().unwrap_or(1).max(1);
            prev_end = start + group.duration + group.stagger * (count - 1) as f64;
            prev_start = start;
            starts.push(start);
        }
        starts
    }

    /// Start time of element `index` within group `group_index`, given the
    /// group starts from `schedule`.
    pub fn element_start(&self, starts: &[f64], group_index: usize, index: usize) -> f64 {
        starts[group_index] + self.groups[group_index].stagger * index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Group {
        Group::new("card")
            .from_style(StyleProps::new().opacity(0.0).y(60.0))
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.6)
            .stagger(0.1)
    }

    #[test]
    fn staggered_cards_complete_in_order() {
        let timeline = Timeline::new(vec![cards()]);
        let starts = timeline.schedule(&[3]);
        assert_eq!(starts, vec![0.0]);
        for (index, expected) in [(0, 0.6), (1, 0.7), (2, 0.8)] {
            let start = timeline.element_start(&starts, 0, index);
            let done = start + timeline.groups[0].duration;
            assert!((done - expected).abs() < 1e-9, "card {index} done at {done}");
        }
    }

    #[test]
    fn after_prev_end_waits_for_stagger_tail() {
        let timeline = Timeline::new(vec![cards(), Group::new("title").after_prev_end(0.0)]);
        let starts = timeline.schedule(&[3, 1]);
        // previous group ends at 0.6 + 2 * 0.1
        assert!((starts[1] - 0.8).abs() < 1e-9);
    }

    #[test]
    fn negative_offsets_overlap_but_never_go_negative() {
        let timeline = Timeline::new(vec![
            Group::new("a").duration(0.6),
            Group::new("b").duration(0.8).after_prev_end(-0.3),
            Group::new("c").duration(0.5).after_prev_start(-10.0),
        ]);
        let starts = timeline.schedule(&[1, 1, 1]);
        assert_eq!(starts[0], 0.0);
        assert!((starts[1] - 0.3).abs() < 1e-9);
        assert_eq!(starts[2], 0.0);
    }

    #[test]
    fn lead_in_delay_shifts_every_group() {
        let timeline = Timeline::new(vec![
            Group::new("a").duration(0.6),
            Group::new("b").at(0.2),
        ])
        .with_delay(0.3);
        let starts = timeline.schedule(&[1, 1]);
        assert!((starts[0] - 0.3).abs() < 1e-9);
        assert!((starts[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn groups_start_in_declared_order_for_forward_offsets() {
        let timeline = Timeline::new(vec![
            Group::new("title").duration(0.5),
            Group::new("icons").after_prev_start(0.2),
            Group::new("labels").after_prev_start(0.2),
        ]);
        let starts = timeline.schedule(&[1, 4, 4]);
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn easing_hits_both_endpoints() {
        for easing in [Easing::Linear, Easing::SoftOut, Easing::EaseOut, Easing::BackOut] {
            assert!(easing.eval(0.0).abs() < 1e-9);
            assert!((easing.eval(1.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn back_out_overshoots_midway() {
        assert!(Easing::BackOut.eval(0.8) > 1.0);
        assert!(Easing::EaseOut.eval(0.8) <= 1.0);
    }

    #[test]
    fn css_emits_only_declared_properties() {
        let hidden = StyleProps::new().opacity(0.0).y(60.0);
        let css = hidden.css();
        assert!(css.contains("opacity: 0"));
        assert!(css.contains("translate(0px, 60px)"));
        assert!(!css.contains("blur"));
        assert!(!css.contains("scale"));
        assert_eq!(StyleProps::new().css(), "");
    }

    #[test]
    fn css_combines_transform_channels() {
        let props = StyleProps::new().x(100.0).rotate_y(25.0).scale(0.9);
        let css = props.css();
        assert!(css.contains("translate(100px, 0px)"));
        assert!(css.contains("scale(0.9)"));
        assert!(css.contains("rotateY(25deg)"));
    }
}
