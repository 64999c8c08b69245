//! Renderers that turn [`StatementData`] into display strings.
//!
//! Renderers only read the enriched values and totals; nothing is recomputed
//! here. Money is shown through [`Usd`].

use crate::error::Result;
use crate::invoice::Invoice;
use crate::money::Usd;
use crate::play::PlayCatalog;
use crate::statement::{create_statement_data, StatementData};
use clap::ValueEnum;
use std::fmt::Write as _;

/// Output format of a rendered statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals and logs
    #[default]
    Text,
    /// HTML fragment
    Html,
    /// One CSV record per performance
    Csv,
    /// The statement data itself, as pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Renders `data` in this format.
    pub fn render(&self, data: &StatementData) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_plain_text(data)),
            OutputFormat::Html => Ok(render_html(data)),
            OutputFormat::Csv => render_csv(data),
            OutputFormat::Json => render_json(data),
        }
    }
}

/// Renders a plain-text statement.
pub fn render_plain_text(data: &StatementData) -> String {
    let mut result = format!("Statement for {}\n", data.customer());
    for perf in data.performances() {
        let _ = writeln!(
            result,
            "  {}: {} ({} seats)",
            perf.play().name,
            Usd::from_cents(perf.amount()),
            perf.audience()
        );
    }
    let _ = writeln!(result, "Amount owed is {}", Usd::from_cents(data.total_amount()));
    let _ = writeln!(result, "You earned {} credits", data.total_volume_credits());
    result
}

/// Renders an HTML statement fragment.
pub fn render_html(data: &StatementData) -> String {
    let mut result = format!("<h1>Statement for {}</h1>\n", escape_html(data.customer()));
    result.push_str("<table>\n");
    result.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>\n");
    for perf in data.performances() {
        let _ = writeln!(
            result,
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&perf.play().name),
            perf.audience(),
            Usd::from_cents(perf.amount())
        );
    }
    result.push_str("</table>\n");
    let _ = writeln!(
        result,
        "<p>Amount owed is <em>{}</em></p>",
        Usd::from_cents(data.total_amount())
    );
    let _ = writeln!(
        result,
        "<p>You earned <em>{}</em> credits</p>",
        data.total_volume_credits()
    );
    result
}

/// Renders one CSV record per performance under a `play,seats,amount,credits` header.
pub fn render_csv(data: &StatementData) -> Result<String> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());

    csv_writer.write_record(["play", "seats", "amount", "credits"])?;
    for perf in data.performances() {
        csv_writer.write_record([
            perf.play().name.clone(),
            perf.audience().to_string(),
            Usd::from_cents(perf.amount()).to_string(),
            perf.volume_credits().to_string(),
        ])?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Renders the statement data as pretty-printed JSON.
pub fn render_json(data: &StatementData) -> Result<String> {
    let mut result = serde_json::to_string_pretty(data)?;
    result.push('\n');
    Ok(result)
}

/// Builds and renders a plain-text statement for one invoice.
pub fn statement(invoice: &Invoice, catalog: &PlayCatalog) -> Result<String> {
    Ok(render_plain_text(&create_statement_data(invoice, catalog)?))
}

/// Builds and renders an HTML statement for one invoice.
pub fn html_statement(invoice: &Invoice, catalog: &PlayCatalog) -> Result<String> {
    Ok(render_html(&create_statement_data(invoice, catalog)?))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Performance;
    use crate::play::Play;

    fn catalog() -> PlayCatalog {
        [
            ("hamlet", Play::new("Hamlet", "tragedy")),
            ("as-like", Play::new("As You Like It", "comedy")),
            ("othello", Play::new("Othello", "tragedy")),
        ]
        .into_iter()
        .collect()
    }

    fn invoice() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    #[test]
    fn test_plain_text_statement() {
        let expected = "Statement for BigCo\n\
                        \x20 Hamlet: $650.00 (55 seats)\n\
                        \x20 As You Like It: $580.00 (35 seats)\n\
                        \x20 Othello: $500.00 (40 seats)\n\
                        Amount owed is $1,730.00\n\
                        You earned 47 credits\n";

        assert_eq!(statement(&invoice(), &catalog()).unwrap(), expected);
    }

    #[test]
    fn test_html_statement() {
        let expected = "<h1>Statement for BigCo</h1>\n\
                        <table>\n\
                        <tr><th>play</th><th>seats</th><th>cost</th></tr>\n\
                        \x20 <tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>\n\
                        \x20 <tr><td>As You Like It</td><td>35</td><td>$580.00</td></tr>\n\
                        \x20 <tr><td>Othello</td><td>40</td><td>$500.00</td></tr>\n\
                        </table>\n\
                        <p>Amount owed is <em>$1,730.00</em></p>\n\
                        <p>You earned <em>47</em> credits</p>\n";

        assert_eq!(html_statement(&invoice(), &catalog()).unwrap(), expected);
    }

    #[test]
    fn test_html_escapes_names() {
        let catalog: PlayCatalog = [("rg", Play::new("Rosencrantz & <Guildenstern>", "comedy"))]
            .into_iter()
            .collect();
        let invoice = Invoice::new("O'Brien \"Co\"", vec![Performance::new("rg", 1)]);

        let html = html_statement(&invoice, &catalog).unwrap();
        assert!(html.contains("<h1>Statement for O&#39;Brien &quot;Co&quot;</h1>"));
        assert!(html.contains("<td>Rosencrantz &amp; &lt;Guildenstern&gt;</td>"));
    }

    #[test]
    fn test_csv_quotes_grouped_amounts() {
        let data = create_statement_data(&invoice(), &catalog()).unwrap();
        let csv = OutputFormat::Csv.render(&data).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "play,seats,amount,credits");
        assert_eq!(lines[1], "Hamlet,55,$650.00,25");
        assert_eq!(lines[2], "As You Like It,35,$580.00,12");
        assert_eq!(lines.len(), 4);

        let big = Invoice::new("BigCo", vec![Performance::new("hamlet", 100)]);
        let data = create_statement_data(&big, &catalog()).unwrap();
        let csv = render_csv(&data).unwrap();
        assert!(csv.contains("Hamlet,100,\"$1,100.00\",70"));
    }

    #[test]
    fn test_json_matches_statement_data() {
        let data = create_statement_data(&invoice(), &catalog()).unwrap();
        let json = OutputFormat::Json.render(&data).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalAmount"], 173_000);
        assert_eq!(value["totalVolumeCredits"], 47);
        assert_eq!(value["performances"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_statement_renders_zero_totals() {
        let data = create_statement_data(&Invoice::new("Nobody", vec![]), &catalog()).unwrap();

        assert_eq!(
            OutputFormat::Text.render(&data).unwrap(),
            "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits\n"
        );
        assert_eq!(
            OutputFormat::Csv.render(&data).unwrap(),
            "play,seats,amount,credits\n"
        );
    }

    #[test]
    fn test_statement_propagates_build_errors() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("macbeth", 10)]);
        let err = statement(&invoice, &catalog()).unwrap_err();
        assert!(err.is_data_error());
    }
}
