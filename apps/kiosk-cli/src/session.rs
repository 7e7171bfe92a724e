//! # Ordering Session
//!
//! The interaction loop: prompt, parse, dispatch, repeat until exit.
//!
//! ## One Iteration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Session Loop (per token)                        │
//! │                                                                     │
//! │  print menu prompt                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  read one line ──── EOF ──────────────────► finish (like Exit)      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  parse integer? ─── no ───► "Please enter a valid number." ──┐      │
//! │       │                                                      │      │
//! │       ▼                                                      │      │
//! │  1..=N ──► ledger.record(n-1) ──► "<name> ordered. ..."  ────┤      │
//! │       │                                                      │      │
//! │  N+1 ────► "Order finished." ──► break                       │      │
//! │       │                                                      │      │
//! │  else ───► "Menu <n> is invalid." ───────────────────────────┤      │
//! │                                                              │      │
//! │       ┌──────────────────────────────────────────────────────┘      │
//! │       ▼                                                             │
//! │  next iteration (state untouched on every error path)               │
//! │                                                                     │
//! │  After break: render receipt, write it, hand back to main for      │
//! │  ticket issuance.                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is synchronous and blocking-on-input by design: exactly one
//! selection per suspension, no parallelism, no timeout. Reader and writer
//! are injected so tests drive the session with scripted input.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use kiosk_core::{Catalog, DiscountPolicy, OrderLedger, Receipt};

/// An interactive ordering session over an injected reader/writer pair.
pub struct Session<'a, R, W> {
    catalog: &'a Catalog,
    policy: DiscountPolicy,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session against a catalog and discount policy.
    pub fn new(catalog: &'a Catalog, policy: DiscountPolicy, input: R, output: W) -> Self {
        Session {
            catalog,
            policy,
            input,
            output,
        }
    }

    /// Runs the session to completion and returns the rendered receipt.
    ///
    /// Recoverable conditions (parse failures, out-of-range selections)
    /// are reported to the output and never terminate the loop or touch
    /// the ledger. Only terminal I/O failure aborts the session.
    pub fn run(mut self) -> std::io::Result<Receipt> {
        let mut ledger = OrderLedger::new(self.catalog);
        let menu_len = self.catalog.len();

        loop {
            write!(self.output, "{}", self.catalog.display_menu())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF behaves like the exit sentinel
                writeln!(self.output, "Order finished.")?;
                break;
            }

            let token = line.trim();
            let selection: i64 = match token.parse() {
                Ok(n) => n,
                Err(_) => {
                    warn!(token, "Selection did not parse as a number");
                    writeln!(self.output, "Please enter a valid number. Try again.")?;
                    continue;
                }
            };

            if selection >= 1 && selection <= menu_len as i64 {
                // record() cannot fail here: the range check above is
                // exactly the ledger's own bound
                match ledger.record(self.catalog, (selection - 1) as usize) {
                    Ok(order) => {
                        info!(item = %order.name, price = order.price.won(), "Recorded order");
                        writeln!(self.output, "{} ordered. Price: {}", order.name, order.price)?;
                    }
                    Err(err) => {
                        warn!(%err, "Selection rejected by the ledger");
                        writeln!(self.output, "{err}")?;
                    }
                }
            } else if selection == menu_len as i64 + 1 {
                writeln!(self.output, "Order finished.")?;
                break;
            } else {
                warn!(selection, "Selection outside the menu");
                writeln!(
                    self.output,
                    "Menu {selection} is invalid. Please choose from the above menu."
                )?;
            }
        }

        let receipt = Receipt::render(self.catalog, &ledger, &self.policy);
        writeln!(self.output)?;
        write!(self.output, "{receipt}")?;
        self.output.flush()?;

        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cafe_catalog() -> Catalog {
        Catalog::new(
            vec![
                "Ice Americano".to_string(),
                "Cafe Latte".to_string(),
                "Watermelon Juice".to_string(),
            ],
            vec![2000, 3000, 4900],
        )
        .unwrap()
    }

    /// Drives a session with scripted input; returns (receipt, transcript).
    fn run_script(script: &str) -> (Receipt, String) {
        let catalog = cafe_catalog();
        let mut out = Vec::new();
        let session = Session::new(
            &catalog,
            DiscountPolicy::default(),
            Cursor::new(script.to_string()),
            &mut out,
        );
        let receipt = session.run().unwrap();
        (receipt, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_basic_order_no_discount() {
        // 2x americano, 1x latte, exit (4) → 7000, below threshold
        let (receipt, transcript) = run_script("1\n1\n2\n4\n");

        assert_eq!(receipt.total.won(), 7000);
        assert_eq!(receipt.total_due.won(), 7000);
        assert!(!receipt.discounted());

        assert!(transcript.contains("Ice Americano ordered. Price: 2000 won"));
        assert!(transcript.contains("Cafe Latte ordered. Price: 3000 won"));
        assert!(transcript.contains("Order finished."));
        assert!(transcript.contains("No discount applied."));
    }

    #[test]
    fn test_below_threshold_scenario() {
        // juice + 2x americano = 8900, still no discount
        let (receipt, _) = run_script("3\n1\n1\n4\n");
        assert_eq!(receipt.total.won(), 8900);
        assert!(!receipt.discounted());
    }

    #[test]
    fn test_discount_scenario() {
        // 2x juice = 9800 (below), plus one americano = 11800 (discounted)
        let (receipt, transcript) = run_script("3\n3\n1\n4\n");

        assert_eq!(receipt.total.won(), 11_800);
        assert_eq!(receipt.discount.won(), 1_180);
        assert_eq!(receipt.total_due.won(), 10_620);
        assert!(transcript.contains("Discount amount:"));
    }

    #[test]
    fn test_invalid_selection_continues() {
        // 5 is out of range on a 3-item menu; only the 1 counts
        let (receipt, transcript) = run_script("5\n1\n4\n");

        assert!(transcript.contains("Menu 5 is invalid. Please choose from the above menu."));
        assert_eq!(receipt.total.won(), 2000);
        assert_eq!(receipt.lines.len(), 1);
    }

    #[test]
    fn test_non_numeric_input_continues() {
        let (receipt, transcript) = run_script("latte\n2\n4\n");

        assert!(transcript.contains("Please enter a valid number. Try again."));
        assert_eq!(receipt.total.won(), 3000);
    }

    #[test]
    fn test_zero_and_negative_are_invalid() {
        let (receipt, transcript) = run_script("0\n-1\n4\n");

        assert!(transcript.contains("Menu 0 is invalid."));
        assert!(transcript.contains("Menu -1 is invalid."));
        assert!(receipt.lines.is_empty());
    }

    #[test]
    fn test_eof_ends_session_like_exit() {
        // no exit sentinel; input just ends
        let (receipt, transcript) = run_script("1\n");

        assert!(transcript.contains("Order finished."));
        assert_eq!(receipt.total.won(), 2000);
    }

    #[test]
    fn test_menu_prompt_repeats_each_iteration() {
        let (_, transcript) = run_script("1\n4\n");
        let prompts = transcript.matches("4) Exit : ").count();
        // once before the order, once before the exit
        assert_eq!(prompts, 2);
    }

    #[test]
    fn test_receipt_printed_in_transcript() {
        let (_, transcript) = run_script("1\n1\n2\n4\n");
        assert!(transcript.contains("Product         Price      Amount     Subtotal"));
        assert!(transcript.contains("Total price:                   7000 won"));
    }
}
