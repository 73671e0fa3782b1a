use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use itertools::Itertools;
use num::BigUint;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

/// Counters one press of a button increments. A counter index may appear more
/// than once, in which case a press increments that counter once per
/// appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    counter_inds: Vec<usize>,
}

impl TryFrom<&str> for Button {
    type Error = Error;

    // Text between the parentheses, e.g. "0,2,3".
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let text = value.trim();
        if text.is_empty() {
            return Ok(Button::default());
        }

        text.split(',')
            .map(|s| {
                let s = s.trim();
                if !is_plain_number(s) {
                    return Err(Error::InvalidButtonIndexText(s.to_string()));
                }

                s.parse::<usize>()
                    .map_err(|_| Error::InvalidButtonIndexText(s.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Button::new)
    }
}

impl Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.counter_inds.iter().join(","))
    }
}

impl Button {
    pub fn new(counter_inds: Vec<usize>) -> Self {
        Self { counter_inds }
    }

    pub fn counter_inds(&self) -> &[usize] {
        &self.counter_inds
    }

    pub fn is_empty(&self) -> bool {
        self.counter_inds.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    diagram: String,
    buttons: Vec<Button>,
    targets: Vec<BigUint>,
}

impl TryFrom<&str> for Machine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static DIAGRAM_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());
        static BUTTON_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
        static TARGETS_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\{([^}]*)\}").unwrap());

        let (diagram, buttons_start) = match DIAGRAM_PATTERN.captures(value) {
            Some(caps) => (caps[1].to_string(), caps.get(0).map_or(0, |m| m.end())),
            None => (String::new(), 0),
        };
        let targets_caps = TARGETS_PATTERN
            .captures_at(value, buttons_start)
            .ok_or_else(|| Error::NoTargets(value.to_string()))?;
        let buttons_end = targets_caps.get(0).map_or(value.len(), |m| m.start());
        let buttons = BUTTON_PATTERN
            .captures_iter(&value[buttons_start..buttons_end])
            .map(|caps| Button::try_from(&caps[1]))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let targets_text = targets_caps[1].trim();
        let targets = if targets_text.is_empty() {
            Vec::new()
        } else {
            targets_text
                .split(',')
                .map(|s| {
                    let s = s.trim();
                    if !is_plain_number(s) {
                        return Err(Error::InvalidTargetText(s.to_string()));
                    }

                    s.parse::<BigUint>()
                        .map_err(|_| Error::InvalidTargetText(s.to_string()))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?
        };

        Ok(Machine::new(buttons, targets).with_diagram(diagram))
    }
}

impl Display for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.diagram)?;
        for button in &self.buttons {
            write!(f, " {}", button)?;
        }
        write!(f, " {{{}}}", self.targets.iter().join(","))
    }
}

impl Machine {
    pub fn new(buttons: Vec<Button>, targets: Vec<BigUint>) -> Self {
        Self {
            diagram: String::new(),
            buttons,
            targets,
        }
    }

    pub fn with_diagram(mut self, diagram: impl Into<String>) -> Self {
        self.diagram = diagram.into();
        self
    }

    /// Indicator light diagram, kept as written. The press solver ignores it.
    pub fn diagram(&self) -> &str {
        &self.diagram
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn targets(&self) -> &[BigUint] {
        &self.targets
    }

    pub fn button_n(&self) -> usize {
        self.buttons.len()
    }

    pub fn counter_n(&self) -> usize {
        self.targets.len()
    }
}

// Numbers in machine text are plain decimal digits, no sign or underscores.
fn is_plain_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn read_machines<P: AsRef<Path>>(path: P) -> Result<Vec<Machine>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut machines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let machine = Machine::try_from(line.as_str()).with_context(|| {
            format!(
                "Failed to parse machine in line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        machines.push(machine);
    }

    Ok(machines)
}
