//! Host description and attribution printed under the table.

use sysinfo::System;

/// Attribution appended to every table report.
pub const ATTRIBUTION: &str = "Benchmarking powered by [Criterion.rs](https://github.com/bheisler/criterion.rs). \\\n\
                               Feel free to run some benchmarkings yourself!";

/// The machine the benchmarks ran on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// Operating system name.
    pub system: String,
    /// Machine architecture.
    pub machine: String,
    /// Processor brand string.
    pub processor: String,
}

impl HostInfo {
    /// Query the current host.
    pub fn detect() -> Self {
        let sys = System::new_all();
        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        Self {
            system: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            machine: std::env::consts::ARCH.to_string(),
            processor: processor.unwrap_or_else(|| "unknown".to_string()),
        }
    }

    /// Render the footer: host lines, a blank line, then the attribution.
    pub fn footer(&self) -> String {
        format!(
            "- System: {}\n- Machine: {}\n- Processor: {}\n\n{ATTRIBUTION}\n",
            self.system, self.machine, self.processor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_layout() {
        let host = HostInfo {
            system: "Linux".into(),
            machine: "x86_64".into(),
            processor: "AMD Ryzen 9 7950X".into(),
        };
        let footer = host.footer();
        let lines: Vec<&str> = footer.lines().collect();
        assert_eq!(
            lines,
            [
                "- System: Linux",
                "- Machine: x86_64",
                "- Processor: AMD Ryzen 9 7950X",
                "",
                "Benchmarking powered by [Criterion.rs](https://github.com/bheisler/criterion.rs). \\",
                "Feel free to run some benchmarkings yourself!",
            ]
        );
    }

    #[test]
    fn detect_fills_every_field() {
        let host = HostInfo::detect();
        assert!(!host.system.is_empty());
        assert_eq!(host.machine, std::env::consts::ARCH);
        assert!(!host.processor.is_empty());
    }
}
