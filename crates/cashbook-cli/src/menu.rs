//! Interactive home, ledger, and reports screens.
//!
//! A `Session` owns the loaded ledger and drives it from a `Console`.
//! End of input at any prompt ends the session cleanly.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, error};

use cashbook_core::filter::{by_period, by_vendor, custom_search, deposits, payments};
use cashbook_core::present::render;
use cashbook_core::record::parse_amount;
use cashbook_core::{Backend, Ledger, Period, Record};

use crate::clock::Clock;
use crate::helpers::{build_criteria, Console, CriteriaInput};

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const CHOICE_PROMPT: &str = "Enter choice: ";

/// What a screen wants to happen after it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Redisplay the calling screen
    Stay,
    /// Input ended; unwind every screen
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Deposit,
    Payment,
}

impl EntryKind {
    fn title(self) -> &'static str {
        match self {
            EntryKind::Deposit => "Add Deposit",
            EntryKind::Payment => "Make Payment (Debit)",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            EntryKind::Deposit => "Deposit",
            EntryKind::Payment => "Payment",
        }
    }

    /// Payments are entered as a magnitude and stored negated.
    fn signed(self, amount: Decimal) -> Decimal {
        match self {
            EntryKind::Deposit => amount,
            EntryKind::Payment => -amount,
        }
    }
}

pub struct Session<'c, B: Backend, R, W> {
    ledger: Ledger<B>,
    console: Console<R, W>,
    clock: &'c dyn Clock,
}

impl<'c, B: Backend, R: BufRead, W: Write> Session<'c, B, R, W> {
    pub fn new(ledger: Ledger<B>, console: Console<R, W>, clock: &'c dyn Clock) -> Self {
        Self {
            ledger,
            console,
            clock,
        }
    }

    /// Hand back the ledger and console, e.g. to inspect them after a run.
    #[cfg(test)]
    pub fn into_parts(self) -> (Ledger<B>, Console<R, W>) {
        (self.ledger, self.console)
    }

    /// Run the home screen until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.console.say("\nHome Screen")?;
            self.console.say("D) Add Deposit")?;
            self.console.say("P) Make Payment (Debit)")?;
            self.console.say("L) Ledger")?;
            self.console.say("X) Exit")?;
            let Some(choice) = self.console.prompt(CHOICE_PROMPT)? else {
                return Ok(());
            };

            let flow = match choice.to_uppercase().as_str() {
                "D" => self.add_entry(EntryKind::Deposit)?,
                "P" => self.add_entry(EntryKind::Payment)?,
                "L" => self.ledger_screen()?,
                "X" => return Ok(()),
                _ => {
                    self.console.say(INVALID_CHOICE)?;
                    Flow::Stay
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn add_entry(&mut self, kind: EntryKind) -> anyhow::Result<Flow> {
        self.console.say(&format!("\n{}", kind.title()))?;
        let now = self.clock.now();

        let Some(description) = self.console.prompt("Enter description: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(vendor) = self.console.prompt("Enter vendor: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount_text) = self.console.prompt("Enter amount: ")? else {
            return Ok(Flow::Quit);
        };

        let amount = match parse_amount(&amount_text) {
            Ok(amount) => kind.signed(amount),
            Err(err) => {
                debug!(error = %err, "amount rejected");
                self.console
                    .say(&format!("Invalid amount. {} not added.", kind.noun()))?;
                return Ok(Flow::Stay);
            }
        };

        let record = match Record::new(now.date(), now.time(), description, vendor, amount) {
            Ok(record) => record,
            Err(err) => {
                self.console
                    .say(&format!("{} {} not added.", err, kind.noun()))?;
                return Ok(Flow::Stay);
            }
        };

        match self.ledger.append(record) {
            Ok(_) => self
                .console
                .say(&format!("{} added successfully.", kind.noun()))?,
            Err(err) => {
                error!(error = %err, "failed to save transaction");
                self.console
                    .say(&format!("Error saving transaction: {}", err))?;
            }
        }
        Ok(Flow::Stay)
    }

    fn ledger_screen(&mut self) -> anyhow::Result<Flow> {
        loop {
            self.console.say("\nLedger Screen")?;
            self.console.say("A) All")?;
            self.console.say("D) Deposits")?;
            self.console.say("P) Payments")?;
            self.console.say("R) Reports")?;
            self.console.say("H) Home")?;
            let Some(choice) = self.console.prompt(CHOICE_PROMPT)? else {
                return Ok(Flow::Quit);
            };

            match choice.to_uppercase().as_str() {
                "A" => show(&mut self.console, self.ledger.records())?,
                "D" => show(&mut self.console, &deposits(self.ledger.records()))?,
                "P" => show(&mut self.console, &payments(self.ledger.records()))?,
                "R" => {
                    if self.reports_screen()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                "H" => return Ok(Flow::Stay),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn reports_screen(&mut self) -> anyhow::Result<Flow> {
        loop {
            self.console.say("\nReports Screen")?;
            for (number, period) in Period::ALL.iter().enumerate() {
                self.console
                    .say(&format!("{}) {}", number + 1, period.title()))?;
            }
            self.console.say("5) Search By Vendor")?;
            self.console.say("6) Custom Search")?;
            self.console.say("0) Back")?;
            let Some(choice) = self.console.prompt(CHOICE_PROMPT)? else {
                return Ok(Flow::Quit);
            };

            let period = match choice.as_str() {
                "1" => Some(Period::MonthToDate),
                "2" => Some(Period::PreviousMonth),
                "3" => Some(Period::YearToDate),
                "4" => Some(Period::PreviousYear),
                _ => None,
            };
            if let Some(period) = period {
                let today = self.clock.today();
                let found = by_period(self.ledger.records(), period, today);
                show(&mut self.console, &found)?;
                continue;
            }

            match choice.as_str() {
                "5" => {
                    let Some(query) = self.console.prompt("Enter vendor name: ")? else {
                        return Ok(Flow::Quit);
                    };
                    show(&mut self.console, &by_vendor(self.ledger.records(), &query))?;
                }
                "6" => {
                    if self.custom_search()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                "0" => return Ok(Flow::Stay),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn custom_search(&mut self) -> anyhow::Result<Flow> {
        self.console.say("\nCustom Search")?;
        let prompts = [
            "Enter start date (yyyy-MM-dd, leave blank for no filter): ",
            "Enter end date (yyyy-MM-dd, leave blank for no filter): ",
            "Enter description (leave blank for no filter): ",
            "Enter vendor (leave blank for no filter): ",
            "Enter amount (leave blank for no filter): ",
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            let Some(answer) = self.console.prompt(prompt)? else {
                return Ok(Flow::Quit);
            };
            answers.push(answer);
        }

        let criteria = build_criteria(CriteriaInput {
            since: Some(&answers[0]),
            until: Some(&answers[1]),
            description: Some(&answers[2]),
            vendor: Some(&answers[3]),
            amount: Some(&answers[4]),
        });
        match criteria {
            Ok(criteria) => {
                let found = custom_search(self.ledger.records(), &criteria);
                show(&mut self.console, &found)?;
            }
            Err(err) => self.console.say(&format!("{} Search cancelled.", err))?,
        }
        Ok(Flow::Stay)
    }
}

fn show<R: BufRead, W: Write>(console: &mut Console<R, W>, records: &[Record]) -> anyhow::Result<()> {
    writeln!(console.output())?;
    render(console.output(), records)?;
    Ok(())
}
