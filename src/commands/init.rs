use std::fs;

use anyhow::Result;

use crate::config::GlobalConfig;

static DEFAULT_CONFIG: &str = r#"# Where the events dataset lives
events_file = "~/parish/events.toml"

# Where Bible annotations are stored
annotations_file = "~/parish/annotations.json"
"#;

static SAMPLE_EVENTS: &str = r#"[[events]]
id = "sunday-service"
date = "2025-03-16"
start_time = "10:00:00"
end_time = "11:30:00"
title = "Sunday Worship Service"
description = "Weekly worship with communion on the first Sunday of the month."
location = "Main Sanctuary"
department = "worship"
color = "blue"
featured = true

[events.recurrence]
type = "weekly"
week_days = ["sun"]
end = "always"

[[events]]
id = "midweek-prayer"
date = "2025-03-18"
start_time = "19:00:00"
end_time = "20:30:00"
title = "Midweek Prayer & Study"
description = "Tuesday evening study, Thursday early-morning prayer."
location = "Fellowship Hall"
department = "discipleship"
color = "purple"

[events.recurrence]
type = "custom"
week_days = ["tue", "thu"]
end = "2025-12-18"

[[events.recurrence.times]]
day = "thu"
start = "06:30:00"
end = "07:30:00"

[[events]]
id = "youth-night"
date = "2025-03-28"
start_time = "18:30:00"
end_time = "21:00:00"
title = "Youth Night"
description = "Games, worship and small groups for grades 7-12."
location = "Youth Center"
department = "youth"
color = "orange"

[events.recurrence]
type = "monthly"
end = "always"

[[events]]
id = "easter-egg-hunt"
date = "2025-04-19"
start_time = "14:00:00"
end_time = "16:00:00"
title = "Easter Egg Hunt"
description = "Community egg hunt on the front lawn. All ages welcome."
location = "Front Lawn"
department = "children"
color = "green"

[events.rsvp]
yes = 24
maybe = 6
no = 2

[[events.attendees]]
id = "member-001"
name = "Grace Okafor"
avatar = "avatars/grace.png"

[[events.attendees]]
id = "member-014"
name = "Samuel Reyes"
"#;

pub fn run() -> Result<()> {
    let config_path = GlobalConfig::config_path()?;
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
    } else {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, DEFAULT_CONFIG)?;
        println!("Created {}", config_path.display());
    }

    let config = GlobalConfig::load()?;
    let events_path = config.events_path();
    if events_path.exists() {
        println!("Events dataset already exists at {}", events_path.display());
        return Ok(());
    }

    if let Some(parent) = events_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&events_path, SAMPLE_EVENTS)?;
    println!("Created {} with a sample dataset", events_path.display());

    Ok(())
}
