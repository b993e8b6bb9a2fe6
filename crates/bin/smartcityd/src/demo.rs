//! The demonstration script and its rendering.
//!
//! [`run`] walks through every subsystem in a fixed order and collects the
//! narration as [`Output`] items; [`render`] writes them as text or JSON.

use std::io::{self, Write};

use serde::Serialize;
use smartcity_app::controller::SmartCityController;
use smartcity_domain::infrastructure::{
    Infrastructure, InfrastructureDirector, Recipe, SmartCityBuilder,
};
use smartcity_domain::report::Report;
use smartcity_domain::role::Role;

use crate::config::{Config, OutputFormat};

/// One item of narration.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Output {
    Heading(String),
    Report(Report),
    Infrastructure(Infrastructure),
}

/// Inputs the script varies on.
#[derive(Debug, Clone)]
pub struct Script {
    pub vehicles: Vec<String>,
    pub roles: Vec<Role>,
}

impl Script {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            vehicles: config.demo.vehicles.clone(),
            roles: config.roles(),
        }
    }
}

/// Run the demonstration against the controller handed out by `acquire`.
///
/// `acquire` is called twice to show that both calls yield one instance.
pub fn run<A>(acquire: A, script: &Script) -> Vec<Output>
where
    A: Fn() -> &'static SmartCityController,
{
    let mut out = Vec::new();

    out.push(Output::Heading(
        "1. Singleton and Facade Demonstration".to_string(),
    ));
    let first = acquire();
    let second = acquire();
    out.push(Output::Report(first.initialization_report().clone()));
    let mut identity = Report::new();
    identity
        .line(format!("Controller 1 address: {first:p}"))
        .line(format!("Controller 2 address: {second:p}"))
        .line(format!(
            "Are controllers the same instance? {} (Singleton check)",
            std::ptr::eq(first, second)
        ));
    out.push(Output::Report(identity));
    out.push(Output::Report(first.start_city_operations()));
    out.push(Output::Report(first.get_city_status()));

    out.push(Output::Heading(
        "2. Factory Method Demonstration (Transport Module)".to_string(),
    ));
    for label in &script.vehicles {
        out.push(Output::Report(first.manage_transport(label)));
    }
    out.push(Output::Report(first.get_city_status()));

    out.push(Output::Heading(
        "3. Adapter and Decorator Demonstration (Security Module)".to_string(),
    ));
    out.push(Output::Report(first.check_security_feed()));

    out.push(Output::Heading(
        "4. Proxy Demonstration (Energy Module)".to_string(),
    ));
    for role in &script.roles {
        out.push(Output::Report(first.request_sensitive_energy_data(role)));
    }
    out.push(Output::Report(first.optimize_energy_usage()));

    out.push(Output::Heading(
        "5. Abstract Factory Demonstration (Lighting Module)".to_string(),
    ));
    let mut lighting = Report::new();
    lighting
        .line(format!(
            "The lighting module is currently using {} devices (see start_city_operations output).",
            first.lighting_family().label()
        ))
        .line("The Abstract Factory pattern allows easy switching between device families.");
    out.push(Output::Report(lighting));

    out.push(Output::Heading(
        "6. Builder Demonstration (Infrastructure Construction)".to_string(),
    ));
    let mut director = InfrastructureDirector::new(SmartCityBuilder::new());
    out.push(Output::Report(Report::from("Building Full Infrastructure:")));
    out.push(Output::Infrastructure(director.construct(Recipe::Full)));
    out.push(Output::Report(Report::from(
        "Building Minimal Infrastructure:",
    )));
    out.push(Output::Infrastructure(director.construct(Recipe::Minimal)));

    out
}

/// Write `outputs` to `writer` in the requested format.
///
/// # Errors
///
/// Returns any I/O error from `writer`, or a serialization error in JSON mode.
pub fn render<W: Write>(
    outputs: &[Output],
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "==================================================")?;
            writeln!(writer, "          SMART CITY SYSTEM DEMONSTRATION         ")?;
            writeln!(writer, "==================================================")?;
            for output in outputs {
                match output {
                    Output::Heading(title) => writeln!(writer, "\n[{title}]")?,
                    Output::Report(report) => writeln!(writer, "{report}")?,
                    Output::Infrastructure(infrastructure) => {
                        writeln!(writer, "{infrastructure}")?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            for output in outputs {
                serde_json::to_writer(&mut *writer, output)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcity_adapter_virtual::build_controller;
    use smartcity_domain::device::DeviceFamily;

    fn leaked(family: DeviceFamily) -> &'static SmartCityController {
        Box::leak(Box::new(build_controller(family)))
    }

    fn default_script() -> Script {
        Script::from_config(&Config::default())
    }

    fn reports(outputs: &[Output]) -> Vec<&Report> {
        outputs
            .iter()
            .filter_map(|o| match o {
                Output::Report(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn should_emit_six_sections_in_order() {
        let controller = leaked(DeviceFamily::Basic);
        let outputs = run(|| controller, &default_script());
        let headings: Vec<&str> = outputs
            .iter()
            .filter_map(|o| match o {
                Output::Heading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headings.len(), 6);
        assert!(headings[0].starts_with("1. Singleton"));
        assert!(headings[5].starts_with("6. Builder"));
    }

    #[test]
    fn should_confirm_singleton_identity() {
        let controller = leaked(DeviceFamily::Basic);
        let outputs = run(|| controller, &default_script());
        assert!(
            reports(&outputs)
                .iter()
                .any(|r| r.contains("Are controllers the same instance? true"))
        );
    }

    #[test]
    fn should_deploy_configured_vehicles() {
        let controller = leaked(DeviceFamily::Basic);
        let script = Script {
            vehicles: vec!["bus".to_string(), "glider".to_string()],
            roles: vec![],
        };
        let outputs = run(|| controller, &script);
        assert_eq!(controller.vehicle_count(), 1);
        assert!(
            reports(&outputs)
                .iter()
                .any(|r| r.contains("unknown vehicle type: glider"))
        );
    }

    #[test]
    fn should_build_full_then_minimal_infrastructure() {
        let controller = leaked(DeviceFamily::Advanced);
        let outputs = run(|| controller, &default_script());
        let built: Vec<&Infrastructure> = outputs
            .iter()
            .filter_map(|o| match o {
                Output::Infrastructure(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(built.len(), 2);
        assert_eq!(built[0].len(), 3);
        assert_eq!(built[1].len(), 1);
        assert_ne!(built[0].id, built[1].id);
    }

    #[test]
    fn should_name_active_lighting_family() {
        let controller = leaked(DeviceFamily::Advanced);
        let outputs = run(|| controller, &default_script());
        assert!(
            reports(&outputs)
                .iter()
                .any(|r| r.contains("currently using Advanced devices"))
        );
    }

    #[test]
    fn should_render_text_with_banner_and_headings() {
        let controller = leaked(DeviceFamily::Basic);
        let outputs = run(|| controller, &default_script());
        let mut buf = Vec::new();
        render(&outputs, OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("=================================================="));
        assert!(text.contains("\n[4. Proxy Demonstration (Energy Module)]\n"));
        assert!(text.contains(
            "- Smart Grid: Decentralized energy management with solar integration."
        ));
    }

    #[test]
    fn should_render_one_json_document_per_output() {
        let controller = leaked(DeviceFamily::Basic);
        let outputs = run(|| controller, &default_script());
        let mut buf = Vec::new();
        render(&outputs, OutputFormat::Json, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let docs: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(docs.len(), outputs.len());
        assert_eq!(docs[0]["kind"], "heading");
        assert!(docs.iter().any(|d| d["kind"] == "infrastructure"));
    }

    #[test]
    fn should_report_initialization_once_before_identity_check() {
        let controller = leaked(DeviceFamily::Basic);
        let outputs = run(|| controller, &default_script());
        let reports = reports(&outputs);
        assert!(reports[0].contains("SmartCityController initialized"));
        assert!(reports[1].contains("Controller 1 address"));
        let announced = reports
            .iter()
            .filter(|r| r.contains("SmartCityController initialized"))
            .count();
        assert_eq!(announced, 1);
    }

    #[test]
    fn should_narrate_denial_for_unrecognised_configured_role() {
        let controller = leaked(DeviceFamily::Basic);
        let script = Script {
            vehicles: vec![],
            roles: vec![Role::from("Mayor")],
        };
        let outputs = run(|| controller, &script);
        assert!(
            reports(&outputs)
                .iter()
                .any(|r| r.contains("Requesting Sensitive Energy Data as Mayor")
                    && r.contains("Access denied"))
        );
    }
}
