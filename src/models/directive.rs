//! Directives: the atomic side effects a scaffolding session performs
//!
//! A [`Plan`] is produced by the emitter as a pure function of the answers and is
//! consumed exactly once by an executor. Order within a phase is significant,
//! e.g. a file has to be written before anything is spliced into it.

use serde::{Deserialize, Serialize};

/// When a directive runs relative to the bundle step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// While the project skeleton is being built
    Immediate,
    /// After dependencies are installed
    Deferred,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Immediate => "immediate",
            Phase::Deferred => "deferred",
        }
    }
}

/// Feature area that emitted a directive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeatureArea {
    Generator,
    ViewComponents,
    Api,
    Authentication,
    Admin,
    Storage,
    Jobs,
    Authorization,
    Monitoring,
    Tooling,
    Finalization,
}

impl FeatureArea {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureArea::Generator => "generator",
            FeatureArea::ViewComponents => "view components",
            FeatureArea::Api => "api",
            FeatureArea::Authentication => "authentication",
            FeatureArea::Admin => "admin",
            FeatureArea::Storage => "storage",
            FeatureArea::Jobs => "jobs",
            FeatureArea::Authorization => "authorization",
            FeatureArea::Monitoring => "monitoring",
            FeatureArea::Tooling => "tooling",
            FeatureArea::Finalization => "finalization",
        }
    }
}

/// Where a gem is fetched from when it is not on the default source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GemSource {
    pub git: String,
    pub branch: Option<String>,
}

/// Bundler `require:` option
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Require {
    /// `require: false`
    Disabled,
    /// `require: "some/path"`
    Path(String),
}

/// Position of spliced text inside an existing file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Immediately before the first occurrence of the marker
    Before(String),
    /// Immediately after the first occurrence of the marker
    After(String),
    /// End of file
    End,
}

impl Anchor {
    pub fn marker(&self) -> Option<&str> {
        match self {
            Anchor::Before(marker) | Anchor::After(marker) => Some(marker.as_str()),
            Anchor::End => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    DeclareDependency {
        name: String,
        source: Option<GemSource>,
        require: Option<Require>,
        /// Bundler groups; empty means the default group
        groups: Vec<String>,
    },
    AppendToFile {
        path: String,
        anchor: Anchor,
        text: String,
    },
    WriteFile {
        path: String,
        contents: String,
    },
    RunCommand {
        argv: Vec<String>,
    },
    /// Human-readable output, e.g. the post-generation summary
    Say {
        lines: Vec<String>,
    },
}

impl Directive {
    /// Plain dependency on the default source and group
    pub fn gem(name: impl Into<String>) -> Self {
        Directive::DeclareDependency {
            name: name.into(),
            source: None,
            require: None,
            groups: Vec::new(),
        }
    }

    pub fn run<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive::RunCommand {
            argv: argv.into_iter().map(Into::into).collect(),
        }
    }

    pub fn append(path: impl Into<String>, anchor: Anchor, text: impl Into<String>) -> Self {
        Directive::AppendToFile {
            path: path.into(),
            anchor,
            text: text.into(),
        }
    }

    pub fn write(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Directive::WriteFile {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Name of the declared gem, if this is a dependency declaration
    pub fn dependency_name(&self) -> Option<&str> {
        match self {
            Directive::DeclareDependency { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn argv(&self) -> Option<&[String]> {
        match self {
            Directive::RunCommand { argv } => Some(argv.as_slice()),
            _ => None,
        }
    }

    /// One-line description used by dry runs and progress output
    pub fn describe(&self) -> String {
        match self {
            Directive::DeclareDependency {
                name,
                source,
                groups,
                ..
            } => {
                let mut out = format!("gem {}", name);
                if let Some(src) = source {
                    out.push_str(&format!(" (git: {})", src.git));
                }
                if !groups.is_empty() {
                    out.push_str(&format!(" [{}]", groups.join(", ")));
                }
                out
            }
            Directive::AppendToFile { path, anchor, .. } => match anchor {
                Anchor::Before(marker) => format!("insert into {} before '{}'", path, marker),
                Anchor::After(marker) => format!("insert into {} after '{}'", path, marker),
                Anchor::End => format!("append to {}", path),
            },
            Directive::WriteFile { path, .. } => format!("write {}", path),
            Directive::RunCommand { argv } => format!("run {}", argv.join(" ")),
            Directive::Say { lines } => format!("say ({} lines)", lines.len()),
        }
    }
}

/// A directive together with its phase and originating feature area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedDirective {
    pub phase: Phase,
    pub area: FeatureArea,
    pub directive: Directive,
}

/// Ordered directive list for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub directives: Vec<PlannedDirective>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, phase: Phase, area: FeatureArea, directive: Directive) {
        self.directives.push(PlannedDirective {
            phase,
            area,
            directive,
        });
    }

    pub fn immediate(&self) -> impl Iterator<Item = &PlannedDirective> {
        self.directives.iter().filter(|d| d.phase == Phase::Immediate)
    }

    pub fn deferred(&self) -> impl Iterator<Item = &PlannedDirective> {
        self.directives.iter().filter(|d| d.phase == Phase::Deferred)
    }

    pub fn in_area(&self, area: FeatureArea) -> impl Iterator<Item = &PlannedDirective> {
        self.directives.iter().filter(move |d| d.area == area)
    }

    /// Names of all declared gems, in declaration order
    pub fn dependencies(&self) -> Vec<&str> {
        self.directives
            .iter()
            .filter_map(|d| d.directive.dependency_name())
            .collect()
    }

    /// All commands, in plan order
    pub fn commands(&self) -> Vec<&[String]> {
        self.directives
            .iter()
            .filter_map(|d| d.directive.argv())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
