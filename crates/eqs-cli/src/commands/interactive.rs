//! `eqs interactive`: the menu-driven session.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Args;
use eqs_core::{EqsError, ErrorInfo, FallbackPolicy};
use eqs_linear::LinearEquation;
use eqs_quadratic::{QuadraticEquation, DISCRIMINANT_GUIDE};
use tracing::{debug, info};

use crate::input::{is_affirmative, parse_choice, parse_coefficient};
use crate::render::{linear_lines, quadratic_lines};
use crate::report::{LinearReport, QuadraticReport};
use crate::settings::Settings;

/// Options for the menu session.
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Skip the welcome banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// Runs the menu on stdin and stdout.
pub fn run(args: &InteractiveArgs, settings: Settings) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), settings);
    menu.banner = !args.no_banner;
    menu.run()?;
    Ok(())
}

const SEPARATOR_WIDTH: usize = 60;

/// Menu-driven session over any line source and sink.
///
/// End of input ends the session cleanly.
pub struct Menu<R, W> {
    input: R,
    output: W,
    settings: Settings,
    banner: bool,
}

fn console_error(err: io::Error) -> EqsError {
    EqsError::Io(ErrorInfo::new("console-io", err.to_string()))
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session reading answers from `input`.
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            banner: true,
        }
    }

    /// Runs the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<(), EqsError> {
        if self.banner {
            self.say("Welcome to the Equation Solver!")?;
            self.say("This program solves linear and quadratic equations with detailed explanations.")?;
        }
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt_choice("Enter your choice (1-3): ", 1, 3)? else {
                break;
            };
            debug!(choice, "menu selection");
            let keep_going = match choice {
                1 => self.handle_linear()?,
                2 => self.handle_quadratic()?,
                _ => false,
            };
            if !keep_going {
                break;
            }
            self.say(&format!("\n{}", "=".repeat(SEPARATOR_WIDTH)))?;
        }
        self.say("\nThank you for using the Equation Solver!")?;
        self.output.flush().map_err(console_error)
    }

    fn say(&mut self, line: &str) -> Result<(), EqsError> {
        writeln!(self.output, "{line}").map_err(console_error)
    }

    fn say_all(&mut self, lines: &[String]) -> Result<(), EqsError> {
        lines.iter().try_for_each(|line| self.say(line))
    }

    fn show_menu(&mut self) -> Result<(), EqsError> {
        self.say("\n=== Equation Solver ===")?;
        self.say("Solve linear and quadratic equations with step-by-step solutions")?;
        self.say("")?;
        self.say("Choose equation type:")?;
        self.say("1. Linear Equation (ax + b = 0)")?;
        self.say("2. Quadratic Equation (ax² + bx + c = 0)")?;
        self.say("3. Exit")
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, EqsError> {
        write!(self.output, "{prompt}").map_err(console_error)?;
        self.output.flush().map_err(console_error)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(console_error)?;
        Ok((read > 0).then_some(line))
    }

    fn prompt_number(&mut self, prompt: &str) -> Result<Option<f64>, EqsError> {
        while let Some(line) = self.read_line(prompt)? {
            match parse_coefficient(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(&format!("Error: {}", err.info().message))?,
            }
        }
        Ok(None)
    }

    fn prompt_choice(&mut self, prompt: &str, min: u32, max: u32) -> Result<Option<u32>, EqsError> {
        while let Some(line) = self.read_line(prompt)? {
            match parse_choice(&line, min, max) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => self.say(&format!("Error: {}", err.info().message))?,
            }
        }
        Ok(None)
    }

    fn prompt_yes_no(&mut self, question: &str) -> Result<bool, EqsError> {
        self.say(question)?;
        Ok(self
            .read_line("")?
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false))
    }

    /// Returns `false` when input ran out mid-way.
    fn handle_linear(&mut self) -> Result<bool, EqsError> {
        self.say("\n--- Linear Equation Solver ---")?;
        self.say("Solving equation: ax + b = 0\n")?;
        let Some(a) = self.prompt_number("Enter coefficient a: ")? else {
            return Ok(false);
        };
        let Some(b) = self.prompt_number("Enter constant b: ")? else {
            return Ok(false);
        };
        self.solve_linear(LinearEquation::new(a, b))?;
        Ok(true)
    }

    fn solve_linear(&mut self, equation: LinearEquation) -> Result<(), EqsError> {
        let report = LinearReport::build(&self.settings.linear, equation);
        info!(equation = %report.formatted, kind = ?report.kind, "solved linear equation");
        let lines = linear_lines(&report, self.settings.precision);
        self.say("")?;
        self.say_all(&lines)
    }

    fn handle_quadratic(&mut self) -> Result<bool, EqsError> {
        self.say("\n--- Quadratic Equation Solver ---")?;
        self.say("Solving equation: ax² + bx + c = 0\n")?;
        let Some(a) = self.prompt_number("Enter coefficient a: ")? else {
            return Ok(false);
        };
        let Some(b) = self.prompt_number("Enter coefficient b: ")? else {
            return Ok(false);
        };
        let Some(c) = self.prompt_number("Enter constant c: ")? else {
            return Ok(false);
        };
        let equation = QuadraticEquation::new(a, b, c);

        if self.settings.quadratic.tolerance().is_near_zero(a) && self.should_fall_back()? {
            let (b, c) = equation.as_linear_tail();
            self.solve_linear(LinearEquation::new(b, c))?;
            return Ok(true);
        }

        let report = QuadraticReport::build(&self.settings.quadratic, equation);
        info!(equation = %report.formatted, valid = report.solution.is_valid(), "solved quadratic equation");
        let lines = quadratic_lines(&report, self.settings.precision);
        self.say("")?;
        self.say_all(&lines)?;

        if self.prompt_yes_no("\nWould you like to learn about the discriminant? (y/n)")? {
            self.say("")?;
            self.say(DISCRIMINANT_GUIDE)?;
        }
        Ok(true)
    }

    fn should_fall_back(&mut self) -> Result<bool, EqsError> {
        match self.settings.fallback {
            FallbackPolicy::Always => Ok(true),
            FallbackPolicy::Never => Ok(false),
            FallbackPolicy::Ask => {
                self.say("\n⚠️  Warning: a = 0 makes this a linear equation, not quadratic!")?;
                let accepted = self.prompt_yes_no(
                    "Would you like to solve bx + c = 0 as a linear equation instead? (y/n)",
                )?;
                if !accepted {
                    self.say("Continuing with quadratic solver...")?;
                }
                Ok(accepted)
            }
        }
    }
}
