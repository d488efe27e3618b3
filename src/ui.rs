//! Formatting for the CI log - status, error, and summary lines.

use crate::tagset::TagSet;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display the derived tag set.
///
/// Shows version, channel, image, and every tag reference in derivation
/// order.
pub fn display_tag_summary(set: &TagSet) {
    println!("\n\x1b[1mDerived tags:\x1b[0m");
    println!("  Version: \x1b[32m{}\x1b[0m", set.version);
    println!("  Channel: {}", set.channel);
    println!("  Image:   {}", set.image);
    for tag in &set.tags {
        println!("  - {}", tag);
    }
}
