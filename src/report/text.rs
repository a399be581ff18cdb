use crate::model::thresholds::ParameterSpec;
use crate::pipeline::stage4_report::FinalSummary;
use crate::profiles::defs::Profile;
use crate::report::format_value;

pub const NO_DANGER: &str = "Aucun danger signalé actuellement.";
const FOOTER: &str = "Système d'Alerte Précoce Climat-Risques - Ministère des Transports et de la Santé";

pub fn render_report(summary: &FinalSummary, profile: &Profile) -> String {
    let mut out = String::new();
    let title = if profile.title.is_empty() {
        profile.id.as_str()
    } else {
        profile.title.as_str()
    };
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
    if !profile.description.is_empty() {
        out.push_str(&profile.description);
        out.push_str("\n\n");
    }

    render_panel(&mut out, summary, profile);
    render_legend(&mut out, profile);
    render_alerts(&mut out, summary, profile);
    render_advice(&mut out, profile);

    out.push_str("---\n");
    out.push_str(FOOTER);
    out.push('\n');
    out.push_str("Données fictives\n");
    out
}

fn section(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
}

fn parameter<'a>(profile: &'a Profile, id: &str) -> Option<&'a ParameterSpec> {
    profile.parameters.iter().find(|p| p.id == id)
}

fn render_panel(out: &mut String, summary: &FinalSummary, profile: &Profile) {
    let panel = &summary.selected;
    section(out, &format!("Tableau de bord - {}", panel.region));
    for m in &panel.metrics {
        let label = parameter(profile, &m.parameter)
            .map(ParameterSpec::label_with_unit)
            .unwrap_or_else(|| m.label.clone());
        out.push_str(&format!(
            "- {}: {} | {}{} | {} | {}\n",
            label,
            format_value(m.value),
            m.level,
            if m.fallback { " (hors seuils)" } else { "" },
            m.title,
            m.recommendation
        ));
    }
    out.push_str(&format!("Impacts recensés: {}\n\n", panel.impact));
}

fn render_legend(out: &mut String, profile: &Profile) {
    if profile.legend.is_empty() {
        return;
    }
    section(out, "Légende des niveaux d'alerte");
    for entry in &profile.legend {
        out.push_str(&format!("- {} : {}\n", entry.level, entry.meaning));
    }
    out.push('\n');
}

fn render_alerts(out: &mut String, summary: &FinalSummary, profile: &Profile) {
    section(out, "Rapport général des alertes");
    if summary.alerts.is_empty() {
        out.push_str(NO_DANGER);
        out.push_str("\n\n");
        return;
    }

    for entry in &summary.alerts.entries {
        let heading = parameter(profile, &entry.parameter)
            .map(|p| p.heading().to_string())
            .unwrap_or_else(|| entry.parameter.clone());
        out.push_str(&format!("[!] {}\n", heading));
        for region in &entry.regions {
            out.push_str(&format!("  {} - Niveau {}\n", region.name, region.level));
            for cell in &region.cells {
                let (label, unit) = match parameter(profile, &cell.parameter) {
                    Some(p) => (p.label.as_str(), p.unit.as_str()),
                    None => (cell.parameter.as_str(), ""),
                };
                let value = format!("{} {}", format_value(cell.value), unit);
                out.push_str(&format!("    - {}: {}\n", label, value.trim_end()));
            }
            out.push_str(&format!("    - Impact: {}\n", region.impact));
        }
        out.push('\n');
    }
}

fn render_advice(out: &mut String, profile: &Profile) {
    let with_advice = profile.advised_parameters();
    if with_advice.is_empty() {
        return;
    }
    section(out, "Recommandations générales");
    for param in with_advice {
        out.push_str(&format!("En cas de {}:\n", param.advice_heading()));
        for line in &param.advice {
            out.push_str(&format!("- {}\n", line));
        }
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
