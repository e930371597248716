//! Interactive command loop.

use crate::command::{is_back, Command};
use crate::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracker_core::Course;
use tracker_registry::{Registry, RegistryConfig};
use tracker_stats::{Aggregator, Notifier};

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Print the start-up banner
    pub banner: bool,
    /// Registry settings
    pub registry: RegistryConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            banner: true,
            registry: RegistryConfig::default(),
        }
    }
}

/// Whether the input stream is still open after a sub-prompt.
enum Flow {
    Continue,
    Closed,
}

/// Line-oriented session over any reader and writer.
///
/// Every line is trimmed before it is interpreted. Running out of input
/// ends the session the same way `exit` does, minus the farewell.
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: Registry,
    notifier: Notifier,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty registry.
    pub fn new(input: R, output: W) -> Self {
        let config = SessionConfig::default();
        Self {
            input,
            output,
            registry: Registry::with_config(config.registry.clone()),
            notifier: Notifier,
            config,
        }
    }

    /// Set the configuration. The registry is rebuilt from it.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.registry = Registry::with_config(config.registry.clone());
        self.config = config;
        self
    }

    /// Consume the session and hand back its writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.config.banner {
            writeln!(self.output, "Learning Progress Tracker")?;
        }

        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                writeln!(self.output, "No input.")?;
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                debug!("Unknown command: {}", line);
                writeln!(self.output, "Error: unknown command!")?;
                continue;
            };

            debug!("Command: {:?}", command);
            let flow = match command {
                Command::Exit => {
                    writeln!(self.output, "Bye!")?;
                    break;
                }
                Command::Back => {
                    writeln!(self.output, "Enter 'exit' to exit the program.")?;
                    Flow::Continue
                }
                Command::AddStudents => self.add_students()?,
                Command::List => {
                    render::student_ids(&mut self.output, self.registry.list_ids().as_deref())?;
                    Flow::Continue
                }
                Command::AddPoints => self.add_points()?,
                Command::Find => self.find()?,
                Command::Statistics => self.statistics()?,
                Command::Notify => {
                    let report = self.notifier.notify_completions(&mut self.registry);
                    render::notifications(&mut self.output, &report)?;
                    Flow::Continue
                }
            };

            if let Flow::Closed = flow {
                break;
            }
        }

        self.output.flush()?;
        info!("Session ended with {} students", self.registry.count());
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_students(&mut self) -> Result<Flow> {
        writeln!(self.output, "Enter student credentials or 'back' to return:")?;
        while let Some(line) = self.read_line()? {
            if is_back(&line) {
                writeln!(
                    self.output,
                    "Total {} students have been added.",
                    self.registry.count()
                )?;
                return Ok(Flow::Continue);
            }
            // `exit` is just a bad credential line here.
            if line.eq_ignore_ascii_case("exit") {
                writeln!(self.output, "Incorrect credentials.")?;
                continue;
            }
            match self.registry.add_student(&line) {
                Ok(_) => writeln!(self.output, "The student has been added.")?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(Flow::Closed)
    }

    fn add_points(&mut self) -> Result<Flow> {
        writeln!(self.output, "Enter an id and points or 'back' to return:")?;
        while let Some(line) = self.read_line()? {
            if is_back(&line) {
                return Ok(Flow::Continue);
            }
            match self.registry.add_points(&line) {
                Ok(_) => writeln!(self.output, "Points updated.")?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(Flow::Closed)
    }

    fn find(&mut self) -> Result<Flow> {
        writeln!(self.output, "Enter an id or 'back' to return:")?;
        while let Some(line) = self.read_line()? {
            if is_back(&line) {
                return Ok(Flow::Continue);
            }
            match self.registry.find(&line) {
                Ok(student) => writeln!(self.output, "{}", student)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(Flow::Closed)
    }

    fn statistics(&mut self) -> Result<Flow> {
        writeln!(
            self.output,
            "Type the name of a course to see details or 'back' to quit:"
        )?;
        let summary = Aggregator::new(self.registry.students()).summary();
        render::statistics(&mut self.output, &summary)?;

        while let Some(line) = self.read_line()? {
            if is_back(&line) {
                return Ok(Flow::Continue);
            }
            let Some(course) = Course::from_name(&line) else {
                writeln!(self.output, "Unknown course.")?;
                continue;
            };
            let entries = Aggregator::new(self.registry.students()).top_learners(course);
            render::leaderboard(&mut self.output, course, &entries)?;
        }
        Ok(Flow::Closed)
    }
}
