use nu_ansi_term::{
    Color::{Cyan, Green, Red},
    Style,
};

/// Styles for the console output. Plain styles are used when colours are disabled.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    heading: Style,
    good: Style,
    bad: Style,
}

impl Console {
    /// Create a console printer, with or without ANSI colours.
    pub fn new(ansi_colours: bool) -> Self {
        if !ansi_colours {
            return Self {
                heading: Style::new(),
                good: Style::new(),
                bad: Style::new(),
            };
        }
        Self {
            heading: Cyan.bold().italic(),
            good: Green.bold(),
            bad: Red.bold().italic(),
        }
    }

    /// Render a verdict line for the subject, e.g. 'StatefulSet default/etcd: steady'.
    pub fn verdict(&self, subject: &str, verdict: &str, flagged: bool) -> String {
        let style = if flagged { self.bad } else { self.good };
        format!("{}: {}", self.heading.paint(subject), style.paint(verdict))
    }

    /// Render a heading followed by one flagged item per line.
    pub fn list(&self, heading: &str, items: &[String]) -> String {
        items.iter().fold(
            self.heading.paint(heading).to_string(),
            |mut out, item| {
                out.push_str(&format!("\n - {}", self.bad.paint(item)));
                out
            },
        )
    }

    /// Print a verdict on console.
    pub fn print_verdict(&self, subject: &str, verdict: &str, flagged: bool) {
        println!("{}", self.verdict(subject, verdict, flagged));
    }

    /// Print a list of flagged items on console.
    pub fn print_list(&self, heading: &str, items: &[String]) {
        println!("{}", self.list(heading, items));
    }
}
