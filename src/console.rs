// Copyright © ArkBig
//! This file provides the wrapping function for differences in standard output variations.

/// Styled output that degrades to plain text when the stream is not a tty.
pub struct Console {
    is_out_tty: bool,
    is_err_tty: bool,
}

impl Console {
    pub fn new() -> Self {
        Console {
            is_out_tty: atty::is(atty::Stream::Stdout),
            is_err_tty: atty::is(atty::Stream::Stderr),
        }
    }

    pub fn print(&self, text: &str) {
        println!("{}", text);
    }

    pub fn print_bold(&self, text: &str) {
        if self.is_out_tty {
            crossterm::execute!(
                std::io::stdout(),
                crossterm::style::SetAttribute(crossterm::style::Attribute::Bold),
                crossterm::style::Print(text),
                crossterm::style::SetAttribute(crossterm::style::Attribute::Reset),
                crossterm::style::Print("\n"),
            )
            .unwrap();
        } else {
            println!("{}", text);
        }
    }

    pub fn warn(&self, text: &str) {
        if self.is_err_tty {
            crossterm::execute!(
                std::io::stderr(),
                crossterm::style::SetForegroundColor(crossterm::style::Color::Yellow),
                crossterm::style::Print(format!("[WARNING]: {}", text)),
                crossterm::style::SetAttribute(crossterm::style::Attribute::Reset),
                crossterm::style::Print("\n"),
            )
            .unwrap();
        } else {
            eprintln!("[WARNING]: {}", text);
        }
    }
}
