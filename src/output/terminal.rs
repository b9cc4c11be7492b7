//! Terminal renderer: styled flowing text, one block per agent.

use colored::Colorize;

use crate::catalog::Catalog;
use crate::models::RecommendationResponse;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render_recommendations(&self, response: &RecommendationResponse) -> String {
        let a = &response.task_analysis;
        let mut output = String::new();

        output.push_str(&format!(
            " {} complexity {}, project {}, workflow {}, experience {}\n\n",
            "Task:".bold(),
            a.complexity.to_string().cyan(),
            a.project_type.to_string().cyan(),
            a.workflow.to_string().cyan(),
            a.experience_level.to_string().cyan(),
        ));

        if response.recommendations.is_empty() {
            output.push_str(&format!("{}", "  No recommendations.\n".yellow()));
            return output;
        }

        for (rank, rec) in response.recommendations.iter().enumerate() {
            output.push_str(&format!(
                " {} {}  {}\n",
                format!("{}.", rank + 1).bold(),
                rec.name.bold(),
                format!("{:.2}", rec.score).green().bold(),
            ));
            output.push_str(&format!("   {}\n", rec.justification));
            if !rec.strengths.is_empty() {
                output.push_str(&format!(
                    "   {} {}\n",
                    "strengths:".cyan(),
                    rec.strengths.join("; ")
                ));
            }
            if !rec.tools.is_empty() {
                output.push_str(&format!("   {} {}\n", "tools:".cyan(), rec.tools.join(", ")));
            }
            output.push_str(&format!("   {} {}\n", "pricing:".cyan(), rec.pricing.dimmed()));
            output.push('\n');
        }

        output
    }

    fn render_catalog(&self, catalog: &Catalog) -> String {
        let mut output = String::new();
        for agent in catalog.iter() {
            output.push_str(&format!("  {}  {}\n", agent.name.bold(), agent.pricing.dimmed()));
            if !agent.ideal_for.is_empty() {
                output.push_str(&format!(
                    "         {}  {}\n",
                    "ideal for:".cyan(),
                    agent.ideal_for.join(", ")
                ));
            }
            if !agent.complexity_handling.is_empty() {
                output.push_str(&format!(
                    "         {}  {}\n",
                    "complexity:".cyan(),
                    agent.complexity_handling.join(", ")
                ));
            }
            if !agent.project_types.is_empty() {
                output.push_str(&format!(
                    "         {}  {}\n",
                    "projects:".cyan(),
                    agent.project_types.join(", ")
                ));
            }
        }
        output
    }
}
