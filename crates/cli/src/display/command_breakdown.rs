use xcbuild_runner_core::XcodebuildCommand;

/// Named parts of an xcodebuild argument vector
#[derive(Debug, Default, PartialEq)]
pub struct CommandBreakdown {
    pub container: Option<String>,
    pub scheme: Option<String>,
    pub configuration: Option<String>,
    pub destination: Option<String>,
    pub action: Option<String>,
    pub constraints: Vec<String>,
    pub test_language: Option<String>,
    pub test_region: Option<String>,
    pub build_settings: Vec<String>,
}

impl CommandBreakdown {
    pub fn from_args(args: &[String]) -> Self {
        let mut breakdown = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-workspace" | "-project" => {
                    breakdown.container = iter.next().map(|v| format!("{arg} {v}"));
                }
                "-scheme" => breakdown.scheme = iter.next().cloned(),
                "-configuration" => breakdown.configuration = iter.next().cloned(),
                "-destination" => breakdown.destination = iter.next().cloned(),
                "-testLanguage" => breakdown.test_language = iter.next().cloned(),
                "-testRegion" => breakdown.test_region = iter.next().cloned(),
                "test" | "-list" | "-showdestinations" => breakdown.action = Some(arg.clone()),
                "-json" => {}
                other if other.starts_with('-') => breakdown.constraints.push(other.to_string()),
                other if other.contains('=') => breakdown.build_settings.push(other.to_string()),
                other => tracing::debug!("Unrecognised argument in breakdown: {}", other),
            }
        }

        breakdown
    }
}

pub fn print_command_breakdown(command: &XcodebuildCommand) {
    let breakdown = CommandBreakdown::from_args(&command.args);

    println!("   🔧 Command breakdown:");
    println!("      • command: {}", command.program);
    if let Some(action) = &breakdown.action {
        println!("      • action: {action}");
    }
    if let Some(container) = &breakdown.container {
        println!("      • container: {container}");
    }
    if let Some(scheme) = &breakdown.scheme {
        println!("      • scheme: {scheme}");
    }
    if let Some(configuration) = &breakdown.configuration {
        println!("      • configuration: {configuration}");
    }
    if let Some(destination) = &breakdown.destination {
        println!("      • destination: {destination}");
    }
    if !breakdown.constraints.is_empty() {
        println!("      • constraints: {}", breakdown.constraints.join(" "));
    }
    if let Some(language) = &breakdown.test_language {
        println!("      • test language: {language}");
    }
    if let Some(region) = &breakdown.test_region {
        println!("      • test region: {region}");
    }
    if !breakdown.build_settings.is_empty() {
        println!("      • build settings: {}", breakdown.build_settings.join(" "));
    }
    if !command.env.is_empty() {
        println!("      • env:");
        for (key, value) in &command.env {
            println!("         {key}={value}");
        }
    }
}
