//! Reader for the cluster listing printed by Weka's EM clusterer.
//!
//! ```text
//!                       Cluster
//! Attribute                   0        1
//!                        (0.35)   (0.65)
//! =======================================
//! initialBiomass5
//!   mean               2085.6366 2023.5001
//!   std. dev.           506.5151  578.9036
//!
//! Time taken to build model (full training data) : 0.4 seconds
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use atn_core::errors::{AtnError, ErrorInfo};

use crate::mixture::{Gaussian, Mixture, MixtureComponent};

#[derive(Default, Clone, Copy)]
struct Partial {
    mean: Option<f64>,
    std_dev: Option<f64>,
}

fn parse_error(code: &str, message: &str, line_no: usize, line: &str) -> AtnError {
    AtnError::Parse(
        ErrorInfo::new(code, message)
            .with_context("line", line_no.to_string())
            .with_context("text", line.trim()),
    )
}

fn numbers(line_no: usize, line: &str, text: &str) -> Result<Vec<f64>, AtnError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| parse_error("weka-number", "expected a numeric column", line_no, line))
        })
        .collect()
}

/// Parses attribute blocks into a mixture. The priors are not part of the
/// block listing and are supplied separately, one per component.
pub fn parse_attribute_blocks(priors: &[f64], text: &str) -> Result<Mixture, AtnError> {
    let mut partial: Vec<BTreeMap<u32, BTreeMap<String, Partial>>> =
        vec![BTreeMap::new(); priors.len()];
    let mut current: Option<(String, u32)> = None;

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('=') {
            continue;
        }

        if !line.starts_with(char::is_whitespace) {
            let header = line.trim_end();
            let split = header.find(|c: char| c.is_ascii_digit()).ok_or_else(|| {
                parse_error("weka-header", "attribute header lacks a node id", line_no, line)
            })?;
            let node_id = header[split..].parse::<u32>().map_err(|_| {
                parse_error("weka-header", "attribute header lacks a node id", line_no, line)
            })?;
            current = Some((header[..split].to_string(), node_id));
            continue;
        }

        let row = line.trim_start();
        let (is_mean, rest) = if let Some(rest) = row.strip_prefix("mean") {
            (true, rest)
        } else if let Some(rest) = row.strip_prefix("std. dev.") {
            (false, rest)
        } else {
            continue;
        };
        let Some((param, node_id)) = current.as_ref() else {
            return Err(parse_error("weka-row", "statistic row before any attribute header", line_no, line));
        };
        let values = numbers(line_no, line, rest)?;
        if values.len() != priors.len() {
            return Err(AtnError::Parse(
                ErrorInfo::new("weka-columns", "column count differs from component count")
                    .with_context("line", line_no.to_string())
                    .with_context("expected", priors.len().to_string())
                    .with_context("found", values.len().to_string()),
            ));
        }
        for (component, value) in values.into_iter().enumerate() {
            let slot = partial[component]
                .entry(*node_id)
                .or_default()
                .entry(param.clone())
                .or_default();
            if is_mean {
                slot.mean = Some(value);
            } else {
                slot.std_dev = Some(value);
            }
        }
    }

    let mut components = Vec::with_capacity(priors.len());
    for (prior, nodes) in priors.iter().zip(partial) {
        let mut complete = BTreeMap::new();
        for (node_id, attributes) in nodes {
            let mut gaussians = BTreeMap::new();
            for (name, slot) in attributes {
                let (Some(mean), Some(std_dev)) = (slot.mean, slot.std_dev) else {
                    return Err(AtnError::Parse(
                        ErrorInfo::new("weka-incomplete", "attribute lacks a mean or std. dev. row")
                            .with_context("node_id", node_id.to_string())
                            .with_context("attribute", name),
                    ));
                };
                gaussians.insert(name, Gaussian { mean, std_dev });
            }
            complete.insert(node_id, gaussians);
        }
        components.push(MixtureComponent {
            prior: *prior,
            nodes: complete,
        });
    }
    Mixture::new(components)
}

/// Parses a complete clusterer report: the parenthesised prior line, the
/// rule below it, then attribute blocks up to the `Time taken` trailer.
pub fn parse_report(report: &str) -> Result<Mixture, AtnError> {
    let mut priors: Option<Vec<f64>> = None;
    let mut skip_rule = false;
    let mut body = String::new();

    for (line_no, line) in report.lines().enumerate() {
        if priors.is_none() {
            if line.trim_start().starts_with('(') {
                let cleaned = line.replace(['(', ')'], " ");
                priors = Some(numbers(line_no, line, &cleaned)?);
                skip_rule = true;
            }
            continue;
        }
        if skip_rule {
            skip_rule = false;
            continue;
        }
        if line.starts_with("Time taken") {
            break;
        }
        body.push_str(line);
        body.push('\n');
    }

    let priors = priors.ok_or_else(|| {
        AtnError::Parse(ErrorInfo::new("weka-priors", "report has no prior line"))
    })?;
    parse_attribute_blocks(&priors, &body)
}

/// Reads and parses a clusterer report from disk.
pub fn parse_report_file(path: &Path) -> Result<Mixture, AtnError> {
    let report = std::fs::read_to_string(path)
        .map_err(|err| AtnError::from_io("weka-read", path, err))?;
    parse_report(&report).map_err(|err| match err {
        AtnError::Parse(info) => {
            AtnError::Parse(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
EM
==

Number of clusters selected by cross validation: 2

                      Cluster
Attribute                   0         1
                       (0.35)    (0.65)
=======================================
initialBiomass5
  mean               2085.6366 2023.5001
  std. dev.           506.5151  578.9036

K5
  mean               8025.473  8326.2055
  std. dev.          2253.5472 2189.6134

X14
  mean                  0.2048    0.2043
  std. dev.             0.0588    0.0585

Time taken to build model (full training data) : 0.42 seconds
";

    #[test]
    fn parses_report_into_components() {
        let mixture = parse_report(REPORT).unwrap();
        let components = mixture.components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].prior, 0.35);
        assert_eq!(components[1].prior, 0.65);
        assert_eq!(components[0].nodes[&5]["K"].mean, 8025.473);
        assert_eq!(components[1].nodes[&5]["initialBiomass"].std_dev, 578.9036);
        assert_eq!(components[1].nodes[&14]["X"].mean, 0.2043);
        assert_eq!(components[0].nodes.len(), 2);
    }

    #[test]
    fn missing_priors_and_short_rows_fail() {
        let err = parse_report("initialBiomass5\n  mean 1 2\n").unwrap_err();
        assert_eq!(err.info().code, "weka-priors");

        let err = parse_attribute_blocks(&[0.5, 0.5], "K5\n  mean 1.0\n").unwrap_err();
        assert_eq!(err.info().code, "weka-columns");

        let err = parse_attribute_blocks(&[1.0], "K5\n  mean 1.0\n").unwrap_err();
        assert_eq!(err.info().code, "weka-incomplete");
    }
}
