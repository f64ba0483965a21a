//! Compact textual encoding of food-web configurations.
//!
//! ```text
//! <nodeCount>,[<id>],<initialBiomass>,<perUnitBiomass>,<paramCount>,<name=value>...,<linkParamCount>,...
//! ```
//!
//! Link parameters are never emitted and must be `0` on input.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};
use std::fmt::Write as _;

use atn_core::errors::{AtnError, ErrorInfo};
use thiserror::Error;

use crate::node::{Node, NodeConfig};

/// Classification of codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Too few or too many comma separated fields.
    FieldCountMismatch,
    /// Node id token is not of the form `[<integer>]`.
    MalformedId,
    /// A numeric field does not parse as a number.
    NonNumericValue,
    /// A parameter token is not of the form `name=value` or repeats a name.
    MalformedParameter,
    /// The same node id appears twice.
    DuplicateNodeId,
    /// A node declares link parameters.
    UnsupportedLinkParameters,
}

impl ParseErrorKind {
    /// Stable kebab-case name used as the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::FieldCountMismatch => "field-count-mismatch",
            ParseErrorKind::MalformedId => "malformed-id",
            ParseErrorKind::NonNumericValue => "non-numeric-value",
            ParseErrorKind::MalformedParameter => "malformed-parameter",
            ParseErrorKind::DuplicateNodeId => "duplicate-node-id",
            ParseErrorKind::UnsupportedLinkParameters => "unsupported-link-parameters",
        }
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoding failure with the zero-based position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at token {position} ({token:?})")]
pub struct ParseError {
    /// Failure classification.
    pub kind: ParseErrorKind,
    /// Index of the token in the comma separated field list.
    pub position: usize,
    /// The offending token (empty when the input ended early).
    pub token: String,
}

impl ParseError {
    /// Creates a parse error.
    pub fn new(kind: ParseErrorKind, position: usize, token: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            token: token.into(),
        }
    }
}

impl From<ParseError> for AtnError {
    fn from(err: ParseError) -> Self {
        AtnError::Parse(
            ErrorInfo::new(err.kind.as_str(), err.to_string())
                .with_context("position", err.position.to_string())
                .with_context("token", err.token),
        )
    }
}

struct Tokens<'a> {
    fields: Vec<&'a str>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn next(&mut self) -> Result<(usize, &'a str), ParseError> {
        let pos = self.pos;
        match self.fields.get(pos) {
            Some(token) => {
                self.pos += 1;
                Ok((pos, token))
            }
            None => Err(ParseError::new(ParseErrorKind::FieldCountMismatch, pos, "")),
        }
    }

    fn count(&mut self) -> Result<usize, ParseError> {
        let (pos, token) = self.next()?;
        token
            .parse::<usize>()
            .map_err(|_| ParseError::new(ParseErrorKind::NonNumericValue, pos, token))
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let (pos, token) = self.next()?;
        parse_number(pos, token)
    }
}

fn parse_number(pos: usize, token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|_| ParseError::new(ParseErrorKind::NonNumericValue, pos, token))
}

/// Decodes node-config text.
pub fn decode(text: &str) -> Result<NodeConfig, ParseError> {
    let mut tokens = Tokens {
        fields: text.trim().split(',').collect(),
        pos: 0,
    };
    let node_count = tokens.count()?;
    let mut nodes = Vec::with_capacity(node_count.min(tokens.fields.len()));
    let mut seen = BTreeSet::new();

    for _ in 0..node_count {
        let (id_pos, id_token) = tokens.next()?;
        let node_id = id_token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .and_then(|inner| inner.parse::<u32>().ok())
            .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedId, id_pos, id_token))?;
        if !seen.insert(node_id) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicateNodeId,
                id_pos,
                id_token,
            ));
        }

        let initial_biomass = tokens.number()?;
        let per_unit_biomass = tokens.number()?;
        let param_count = tokens.count()?;
        let mut params = BTreeMap::new();
        for _ in 0..param_count {
            let (pos, token) = tokens.next()?;
            let (name, value) = token
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedParameter, pos, token))?;
            let value = parse_number(pos, value)?;
            if params.insert(name.to_string(), value).is_some() {
                return Err(ParseError::new(
                    ParseErrorKind::MalformedParameter,
                    pos,
                    token,
                ));
            }
        }

        let link_pos = tokens.pos;
        let link_count = tokens.count()?;
        if link_count != 0 {
            return Err(ParseError::new(
                ParseErrorKind::UnsupportedLinkParameters,
                link_pos,
                link_count.to_string(),
            ));
        }

        nodes.push(Node {
            node_id,
            initial_biomass,
            per_unit_biomass,
            params,
        });
    }

    if tokens.pos != tokens.fields.len() {
        return Err(ParseError::new(
            ParseErrorKind::FieldCountMismatch,
            tokens.pos,
            tokens.fields[tokens.pos],
        ));
    }

    NodeConfig::new(nodes)
}

/// Encodes a config; every node ends with a `0` link-parameter count.
pub fn encode(config: &NodeConfig) -> String {
    let mut out = config.len().to_string();
    for node in config.nodes() {
        let _ = write!(
            out,
            ",[{}],{},{},{},",
            node.node_id,
            format_sig6(node.initial_biomass),
            format_sig6(node.per_unit_biomass),
            node.params.len()
        );
        for (name, value) in &node.params {
            let _ = write!(out, "{}={},", name, format_sig6(*value));
        }
        out.push('0');
    }
    out
}

/// Renders a number with six significant digits, general notation, always
/// keeping one fractional digit in fixed notation (`2000.0`, `0.0075`,
/// `1e-05`, `1.23457e+06`).
pub fn format_sig6(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent) as usize;
        let mut fixed = format!("{:.*}", decimals, value);
        if fixed.contains('.') {
            while fixed.ends_with('0') {
                fixed.pop();
            }
            if fixed.ends_with('.') {
                fixed.push('0');
            }
        } else {
            fixed.push_str(".0");
        }
        fixed
    } else {
        let mut mantissa = mantissa.to_string();
        if mantissa.contains('.') {
            while mantissa.ends_with('0') {
                mantissa.pop();
            }
            if mantissa.ends_with('.') {
                mantissa.pop();
            }
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERGENCE_5: &str = "5,[5],2000.0,1.0,1,K=10000.000,0,[14],1751.0,20.0,1,X=0.201,0,[31],1415.0,0.0075,1,X=1.000,0,[42],240.0,0.205,1,X=0.637,0,[70],2494.0,13.0,1,X=0.155,0";

    #[test]
    fn decodes_convergence_template() {
        let config = decode(CONVERGENCE_5).unwrap();
        assert_eq!(config.len(), 5);
        let grass = &config.nodes()[0];
        assert_eq!(grass.node_id, 5);
        assert_eq!(grass.initial_biomass, 2000.0);
        assert_eq!(grass.params["K"], 10000.0);
        assert_eq!(config.nodes()[2].per_unit_biomass, 0.0075);
        assert_eq!(config.food_web_id(), "5-14-31-42-70");
    }

    #[test]
    fn encodes_with_six_significant_digits() {
        let config = decode(CONVERGENCE_5).unwrap();
        assert_eq!(
            encode(&config),
            "5,[5],2000.0,1.0,1,K=10000.0,0,[14],1751.0,20.0,1,X=0.201,0,[31],1415.0,0.0075,1,X=1.0,0,[42],240.0,0.205,1,X=0.637,0,[70],2494.0,13.0,1,X=0.155,0"
        );
    }

    #[test]
    fn formats_like_general_notation() {
        assert_eq!(format_sig6(2000.0), "2000.0");
        assert_eq!(format_sig6(0.0075), "0.0075");
        assert_eq!(format_sig6(1e-5), "1e-05");
        assert_eq!(format_sig6(1.15e-5), "1.15e-05");
        assert_eq!(format_sig6(1234567.0), "1.23457e+06");
        assert_eq!(format_sig6(999999.5), "1e+06");
        assert_eq!(format_sig6(0.2548493), "0.254849");
        assert_eq!(format_sig6(-3.5), "-3.5");
        assert_eq!(format_sig6(0.0), "0.0");
        assert_eq!(format_sig6(100000.0), "100000.0");
    }

    #[test]
    fn node_without_params_round_trips() {
        let text = "1,[12],300.0,1.0,0,0";
        assert_eq!(encode(&decode(text).unwrap()), text);
    }

    #[test]
    fn reports_error_positions() {
        let err = decode("2,[5],2000.0,1.0,1,K=1.0,0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::FieldCountMismatch);
        assert_eq!(err.position, 7);

        let err = decode("1,5,2000.0,1.0,0,0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedId);
        assert_eq!(err.position, 1);

        let err = decode("1,[5],lots,1.0,0,0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NonNumericValue);
        assert_eq!(err.position, 2);
        assert_eq!(err.token, "lots");

        let err = decode("1,[5],1.0,1.0,1,K=abc,0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NonNumericValue);
        assert_eq!(err.position, 5);

        let err = decode("1,[5],1.0,1.0,1,K,0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedParameter);

        let err = decode("1,[5],1.0,1.0,0,0,extra").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::FieldCountMismatch);
        assert_eq!(err.position, 6);
    }

    #[test]
    fn rejects_links_and_duplicates() {
        let err = decode("1,[5],1.0,1.0,0,1,[6],A=1.0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnsupportedLinkParameters);
        assert_eq!(err.position, 5);

        let err = decode("2,[5],1.0,1.0,0,0,[5],1.0,1.0,0,0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateNodeId);
        assert_eq!(err.position, 6);
    }

    #[test]
    fn parse_error_converts_to_atn_error() {
        let err: AtnError = decode("x").unwrap_err().into();
        assert_eq!(err.info().code, "non-numeric-value");
        assert_eq!(err.info().context["position"], "0");
    }
}
