//! FAQ accordion: at most one panel open.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Open `index`, closing any other panel; close it if it was already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// Keys that activate a header.
    pub fn is_activation_key(key: &str) -> bool {
        matches!(key, "Enter" | " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut faq = Accordion::default();
        faq.toggle(0);
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn toggling_open_panel_closes_it() {
        let mut faq = Accordion::default();
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn activation_keys() {
        assert!(Accordion::is_activation_key("Enter"));
        assert!(Accordion::is_activation_key(" "));
        assert!(!Accordion::is_activation_key("Tab"));
    }
}
