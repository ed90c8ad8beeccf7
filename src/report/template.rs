//! Weekly report generation from embedded Tera templates

use rust_embed::Embed;
use tera::Tera;
use thiserror::Error;

use crate::core::config::DATE_FORMAT;
use crate::core::context::TrackerContext;
use crate::data::ComparisonMode;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const WEEKLY_TEMPLATE: &str = "weekly.md.tera";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template rendering error: {0}")]
    RenderError(String),
}

/// Renders reports using Tera
pub struct ReportGenerator {
    tera: Tera,
}

impl ReportGenerator {
    /// Create a generator with the embedded templates loaded
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(filename) {
                if let Ok(template_str) = std::str::from_utf8(&content.data) {
                    tera.add_raw_template(filename, template_str)
                        .map_err(|e| TemplateError::RenderError(e.to_string()))?;
                }
            }
        }

        Ok(Self { tera })
    }

    fn weekly_context(ctx: &TrackerContext<'_>) -> tera::Context {
        let config = ctx.config();
        let snap = ctx.snapshot();
        let comparison = ctx.configured_comparison();
        let milestones = ctx.milestones();
        let verse = ctx.verse();

        let mut context = tera::Context::new();
        context.insert("title", &config.title);
        context.insert("week", &ctx.week());
        context.insert("week_description", &snap.week_description());
        context.insert("trimester_name", snap.trimester.name());
        context.insert("status", snap.status.label());
        context.insert("percent", &snap.percent_complete);
        context.insert("countdown", &ctx.countdown());
        context.insert("comparison", &comparison.label);
        context.insert("emoji", &comparison.emoji.unwrap_or_default());
        let dad = if config.comparison_mode == ComparisonMode::Dad {
            String::new()
        } else {
            ctx.comparison(ComparisonMode::Dad).label
        };
        context.insert("dad", &dad);
        context.insert("summary", ctx.summary());
        context.insert("milestone", milestones.current);
        context.insert("milestones_reached", &milestones.reached);
        context.insert(
            "next_milestone",
            &milestones.next.as_ref().map(|n| n.name).unwrap_or_default(),
        );
        context.insert(
            "weeks_to_next_milestone",
            &milestones.next.as_ref().map(|n| n.weeks_to_go).unwrap_or_default(),
        );
        context.insert("verse_text", &verse.text);
        context.insert("verse_reference", &verse.reference);
        context.insert("due_date", &config.due_date.format(DATE_FORMAT).to_string());
        context.insert("due_range", &ctx.due_date_range().display());
        context.insert("term_status", ctx.term_status().label());
        context
    }

    /// Render the weekly report for a tracker
    pub fn render_weekly(&self, ctx: &TrackerContext<'_>) -> Result<String, TemplateError> {
        if !self.tera.get_template_names().any(|n| n == WEEKLY_TEMPLATE) {
            return Err(TemplateError::NotFound(WEEKLY_TEMPLATE.to_string()));
        }
        self.tera
            .render(WEEKLY_TEMPLATE, &Self::weekly_context(ctx))
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{SetupInput, TrackerConfig};
    use crate::core::overrides::VerseBook;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_render_weekly_report() {
        let config = TrackerConfig::from_setup(
            SetupInput {
                due_date: "2025-12-31".to_string(),
                title: Some("Baby Smith".to_string()),
                ..Default::default()
            },
            date("2025-01-01"),
        )
        .unwrap();
        let ctx = TrackerContext::new(&config, VerseBook::default(), date("2025-10-02"));

        let report = ReportGenerator::new().unwrap().render_weekly(&ctx).unwrap();
        assert!(report.starts_with("# Baby Smith"));
        assert!(report.contains("**Week 27** (27+1) - Third Trimester"));
        assert!(report.contains("**Cabbage**"));
        assert!(report.contains("Dad's basketball"));
        assert!(report.contains("Next: Full term in 10 week(s)"));
        assert!(report.contains("Due 2025-12-31 (window Dec 17 - Jan 14, Preterm)"));
    }
}
