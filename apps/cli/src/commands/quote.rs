use std::io::Write;

use anyhow::Result;
use tokio::time::{interval, MissedTickBehavior};
use tola_core::Quote;
use tola_invoice::{final_price_line, CalculationSummary, CountUp};
use tracing::debug;

use crate::cli::QuoteArgs;
use crate::commands::price;
use crate::config::AppConfig;

/// Execute the quote command
pub async fn execute(args: &QuoteArgs, cfg: &AppConfig) -> Result<()> {
    let quote = price(&args.pricing, &cfg.defaults)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    let summary = CalculationSummary::from_result(&quote.result, args.pricing.metal(&cfg.defaults));
    if args.animate {
        animate(&summary, &quote).await
    } else {
        print!("{}", summary.render());
        Ok(())
    }
}

/// Prints the breakdown, then counts the final price up on the last line.
async fn animate(summary: &CalculationSummary, quote: &Quote) -> Result<()> {
    for line in summary.breakdown() {
        println!("{}: {}", line.label, line.value);
    }

    let mut stdout = std::io::stdout();
    count_up(&mut stdout, CountUp::with_defaults(quote.result.final_price)).await?;
    writeln!(stdout)?;

    Ok(())
}

/// Redraws the final price line once per frame, returning the cursor with `\r`.
///
/// Each frame is padded to the width of the one before it, so a shorter
/// frame (`Rs 74,984` after `Rs 73,484.32`) leaves no digits behind.
pub async fn count_up<W: Write>(out: &mut W, frames: CountUp) -> Result<()> {
    debug!(frames = frames.frames(), "Starting count-up");

    let mut ticker = interval(frames.step());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut drawn = 0;
    for value in frames {
        ticker.tick().await;
        let line = final_price_line(value);
        write!(out, "\r{:<width$}", line, width = drawn)?;
        out.flush()?;
        drawn = line.chars().count();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::time::Duration;

    /// What a terminal shows after applying each `\r` redraw in turn.
    fn visible_line(output: &str) -> String {
        let mut screen: Vec<char> = Vec::new();
        for frame in output.split('\r') {
            for (i, c) in frame.chars().enumerate() {
                if i < screen.len() {
                    screen[i] = c;
                } else {
                    screen.push(c);
                }
            }
        }
        screen.into_iter().collect::<String>().trim_end().to_string()
    }

    #[tokio::test]
    async fn test_count_up_lands_on_final_price() {
        // 65000/10g, 10 g, 12% making, 3% GST: the frame before the last
        // is wider than the final one.
        let target = Decimal::from(74984);
        let frames = CountUp::new(target, Duration::from_millis(20), Duration::from_millis(1));

        let mut out = Vec::new();
        count_up(&mut out, frames).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(visible_line(&output), final_price_line(target));
        assert_eq!(visible_line(&output), "Final Price: Rs 74,984");
    }

    #[tokio::test]
    async fn test_count_up_clears_longer_frame() {
        let frames = CountUp::new(Decimal::from(10), Duration::from_millis(3), Duration::from_millis(1));

        let mut out = Vec::new();
        count_up(&mut out, frames).await.unwrap();

        // 3.33 → 6.67 → 10: each later frame is shorter than the one before it.
        let output = String::from_utf8(out).unwrap();
        assert_eq!(visible_line(&output), "Final Price: Rs 10");
    }
}
