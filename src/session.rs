//! Interactive prompts and the end-to-end run of one survey report.

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::info;

use crate::analyzers::hourly::group_by_hour;
use crate::chart::write_chart;
use crate::config::AnalyserConfig;
use crate::output::{emit, print_json, print_pretty, summary_lines};
use crate::parser::load_dataset;
use crate::stats::SurveySummary;

const DAYS: RangeInclusive<u32> = 1..=31;
const MONTHS: RangeInclusive<u32> = 1..=12;
const YEARS: RangeInclusive<u32> = 2000..=2024;

/// The day a survey was recorded. Components are range-checked only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl SurveyDate {
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self> {
        if !DAYS.contains(&day) || !MONTHS.contains(&month) || !YEARS.contains(&year) {
            bail!("survey date {day:02}/{month:02}/{year} is outside 01/01/2000 - 31/12/2024");
        }
        Ok(SurveyDate { day, month, year })
    }

    /// `ddmmyyyy`, as used in survey file names.
    pub fn compact(&self) -> String {
        format!("{:02}{:02}{}", self.day, self.month, self.year)
    }
}

impl fmt::Display for SurveyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

impl TryFrom<NaiveDate> for SurveyDate {
    type Error = anyhow::Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        let year = u32::try_from(date.year())?;
        SurveyDate::new(date.day(), date.month(), year)
    }
}

/// Options for a single report run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Read this file instead of the one named after the date.
    pub file: Option<PathBuf>,
    pub json: bool,
    pub chart: bool,
}

/// What a report run produced.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    NoData,
    Reported { chart: Option<PathBuf> },
}

/// Loads the survey for `date`, writes the report to `out` and the results
/// log, then renders the chart.
#[tracing::instrument(skip_all, fields(date = %date))]
pub fn run_report<W: Write>(
    config: &AnalyserConfig,
    date: &SurveyDate,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunOutcome> {
    let file = options
        .file
        .clone()
        .unwrap_or_else(|| config.data_file_for(date));
    let data = load_dataset(&file, out)?;

    if data.is_empty() {
        writeln!(out, "No data available.")?;
        info!(file = %file.display(), "No data to report");
        return Ok(RunOutcome::NoData);
    }

    let summary = SurveySummary::from_dataset(&data, config);
    print_pretty(&summary);
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    emit(out, &summary_lines(&file_name, &summary), &config.results_path)?;

    if options.json {
        print_json(out, &summary)?;
    }

    let chart = if options.chart {
        let hourly = group_by_hour(&data, &config.primary.label, &config.secondary.label);
        let path = config.chart_file_for(date);
        write_chart(&path, &hourly, &date.to_string(), config)?;
        writeln!(out, "Histogram written to {}", path.display())?;
        Some(path)
    } else {
        None
    };

    info!(records = data.len(), "Report complete");
    Ok(RunOutcome::Reported { chart })
}

/// Asks until the answer is an integer inside `range`. `None` on end of input.
pub fn prompt_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: RangeInclusive<u32>,
    out_of_range: &str,
) -> Result<Option<u32>> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(value) => match u32::try_from(value).ok().filter(|v| range.contains(v)) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(output, "{out_of_range}")?,
            },
            Err(e)
                if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                writeln!(output, "{out_of_range}")?
            }
            Err(_) => writeln!(output, "Integer required")?,
        }
    }
}

/// Prompts for day, month and year in turn.
pub fn prompt_survey_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<SurveyDate>> {
    let Some(day) = prompt_in_range(
        input,
        output,
        "Please enter the day of the survey in the format dd: ",
        DAYS,
        "Out of range - values must be in the range 1 and 31.",
    )?
    else {
        return Ok(None);
    };
    let Some(month) = prompt_in_range(
        input,
        output,
        "Please enter the month of the survey in the format MM: ",
        MONTHS,
        "Out of range - values must be in the range from 1 to 12.",
    )?
    else {
        return Ok(None);
    };
    let Some(year) = prompt_in_range(
        input,
        output,
        "Please enter the year of the survey in the format YYYY: ",
        YEARS,
        "Out of range - values must range from 2000 and 2024.",
    )?
    else {
        return Ok(None);
    };

    Ok(Some(SurveyDate::new(day, month, year)?))
}

/// Asks whether to run again. End of input counts as no.
pub fn prompt_repeat<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        write!(output, "Do you want to run the program again? (Y/N): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => {
                writeln!(output, "Exiting the program.")?;
                return Ok(false);
            }
            _ => writeln!(output, "Invalid input. Please enter 'Y' or 'N'.")?,
        }
    }
}

/// Prompt, report, and repeat until the user declines or input ends.
pub fn run_interactive<R: BufRead, W: Write>(
    config: &AnalyserConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let options = RunOptions {
        chart: true,
        ..Default::default()
    };
    let mut runs = 0usize;

    loop {
        let Some(date) = prompt_survey_date(input, output)? else {
            break;
        };
        runs += 1;
        run_report(config, &date, &options, output)?;

        if !prompt_repeat(input, output)? {
            break;
        }
    }

    info!(runs, "Interactive session finished");
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
