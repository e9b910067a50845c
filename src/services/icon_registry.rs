//! Fixed icon tables for entities and actions

/// Icon used for entities of an unknown domain
pub const DEFAULT_ENTITY_ICON: &str = "hexagon";

/// Icon used for actions with no table entry
pub const DEFAULT_ACTION_ICON: &str = "settings-2";

/// Entity domain -> icon
pub const ENTITY_ICONS: &[(&str, &str)] = &[
    ("alarm_control_panel", "bell"),
    ("binary_sensor", "photo-sensor"),
    ("button", "layout-bottombar"),
    ("calendar", "calendar"),
    ("camera", "camera"),
    ("climate", "air-conditioning"),
    ("cover", "car-garage"),
    ("date", "calendar-event"),
    ("datetime", "calendar-time"),
    ("device_tracker", "device-mobile-pin"),
    ("fan", "propeller"),
    ("humidifier", "ripple"),
    ("image", "photo"),
    ("light", "bulb"),
    ("lock", "lock"),
    ("media_player", "music"),
    ("number", "number"),
    ("remote", "device-remote"),
    ("select", "select"),
    ("sensor", "radar"),
    ("siren", "bell-school"),
    ("stt", "ear"),
    ("switch", "toggle-right"),
    ("text", "text-size"),
    ("time", "clock"),
    ("todo", "list-check"),
    ("tts", "broadcast"),
    ("update", "refresh-alert"),
    ("vacuum", "vacuum-cleaner"),
    ("water_heater", "droplet-half-filled"),
    ("weather", "cloud-storm"),
    ("person", "user"),
    ("sun", "sun"),
];

/// `domain.service` or bare domain -> icon
pub const ACTION_ICONS: &[(&str, &str)] = &[
    // Specific services
    ("light.turn_on", "bulb"),
    ("light.turn_off", "bulb-off"),
    ("switch.turn_on", "toggle-right"),
    ("switch.turn_off", "toggle-left"),
    ("lock.lock", "lock"),
    ("lock.unlock", "lock-open"),
    ("lock.open", "door-enter"),
    ("cover.open_cover", "arrow-bar-to-up"),
    ("cover.close_cover", "arrow-bar-to-down"),
    ("cover.stop_cover", "player-stop"),
    ("media_player.media_play", "player-play"),
    ("media_player.media_pause", "player-pause"),
    ("media_player.media_stop", "player-stop"),
    ("media_player.media_next_track", "player-skip-forward"),
    ("media_player.media_previous_track", "player-skip-back"),
    ("media_player.volume_up", "volume"),
    ("media_player.volume_down", "volume-2"),
    ("media_player.volume_mute", "volume-off"),
    ("homeassistant.restart", "refresh"),
    ("homeassistant.stop", "power"),
    ("homeassistant.reload_all", "reload"),
    ("vacuum.return_to_base", "home"),
    ("climate.set_temperature", "temperature"),
    ("climate.set_hvac_mode", "air-conditioning"),
    ("fan.set_percentage", "propeller"),
    ("camera.snapshot", "camera"),
    // Whole domains
    ("automation", "robot"),
    ("script", "script"),
    ("scene", "photo-scan"),
    ("notify", "bell"),
    ("persistent_notification", "message-exclamation"),
    ("tts", "broadcast"),
    ("conversation", "message-chatbot"),
    ("light", "bulb"),
    ("switch", "toggle-right"),
    ("lock", "lock"),
    ("cover", "car-garage"),
    ("media_player", "music"),
    ("climate", "air-conditioning"),
    ("fan", "propeller"),
    ("vacuum", "vacuum-cleaner"),
    ("camera", "camera"),
    ("todo", "list-check"),
    ("calendar", "calendar"),
    ("input_boolean", "toggle-right"),
    ("input_number", "number"),
    ("input_select", "select"),
    ("input_text", "text-size"),
    ("input_datetime", "calendar-time"),
    ("input_button", "layout-bottombar"),
    ("timer", "hourglass"),
    ("counter", "abacus"),
    ("homeassistant", "home"),
    ("logbook", "notebook"),
    ("recorder", "database"),
    ("backup", "archive"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, icon)| *icon)
}

/// Icon for an entity domain (case-insensitive)
pub fn entity_icon(domain: &str) -> &'static str {
    lookup(ENTITY_ICONS, &domain.to_lowercase()).unwrap_or(DEFAULT_ENTITY_ICON)
}

/// Icon for an action: exact id first, then its domain
pub fn action_icon(action_id: &str, domain: &str) -> &'static str {
    lookup(ACTION_ICONS, action_id)
        .or_else(|| lookup(ACTION_ICONS, domain))
        .unwrap_or(DEFAULT_ACTION_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entity_icon_lookup() {
        assert_eq!(entity_icon("light"), "bulb");
        assert_eq!(entity_icon("LIGHT"), "bulb");
        assert_eq!(entity_icon("zone"), DEFAULT_ENTITY_ICON);
    }

    #[test]
    fn test_action_icon_precedence() {
        assert_eq!(action_icon("light.turn_off", "light"), "bulb-off");
        assert_eq!(action_icon("light.toggle", "light"), "bulb");
        assert_eq!(action_icon("mqtt.publish", "mqtt"), DEFAULT_ACTION_ICON);
    }

    #[test]
    fn test_tables_have_unique_keys() {
        for table in [ENTITY_ICONS, ACTION_ICONS] {
            let keys: HashSet<&str> = table.iter().map(|(key, _)| *key).collect();
            assert_eq!(keys.len(), table.len());
        }
    }
}
