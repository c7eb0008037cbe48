//! End-to-end checks of the navigation shell through the public API.

use company_manager::config::{self, ConfigOverrides};
use company_manager::tui::{self, App};
use company_manager::{ClientConfig, GraphQlClient, Navigator, Section, SectionComponent, resolve};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::sync::Arc;

fn app(initial: Section) -> App {
    let client = GraphQlClient::new(ClientConfig::default()).unwrap();
    App::new(Arc::new(client), initial)
}

fn press(app: &mut App, code: KeyCode) {
    tui::handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| tui::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn startup_shows_roles_then_teams_after_selection() {
    let mut nav = Navigator::default();
    assert_eq!(resolve(nav.selected()).section(), Section::Roles);

    nav.select(Section::Teams);
    assert_eq!(resolve(nav.selected()).section(), Section::Teams);

    let active: Vec<Section> = nav
        .menu()
        .into_iter()
        .filter(|entry| entry.active)
        .map(|entry| entry.section)
        .collect();
    assert_eq!(active, vec![Section::Teams]);
}

#[test]
fn selecting_people_right_after_startup() {
    let mut nav = Navigator::default();
    let before = nav.revision();

    nav.select(Section::People);

    assert_eq!(nav.selected(), Section::People);
    assert_eq!(resolve(nav.selected()).id(), "people");
    assert_eq!(nav.revision(), before + 1);
}

#[test]
fn rendered_shell_follows_keyboard_selection() {
    let mut shell = app(Section::default());
    let first = screen(&mut shell);
    assert!(first.contains(tui::APP_TITLE));
    assert!(first.contains(" Roles "));

    press(&mut shell, KeyCode::Char('2'));
    assert_eq!(shell.selected(), Section::Teams);
    assert!(shell.take_redraw());
    assert!(screen(&mut shell).contains(" Teams "));

    press(&mut shell, KeyCode::Tab);
    assert_eq!(shell.selected(), Section::People);

    press(&mut shell, KeyCode::Char('q'));
    assert!(shell.should_quit());
}

#[test]
fn reselecting_the_same_section_still_redraws() {
    let mut shell = app(Section::Teams);
    shell.take_redraw();

    shell.select(Section::Teams);
    assert_eq!(shell.selected(), Section::Teams);
    assert!(shell.take_redraw());
    assert!(!shell.take_redraw());
}

#[test]
fn every_section_name_resolves() {
    for name in ["roles", "Teams", " PEOPLE "] {
        let section: Section = name.parse().unwrap();
        assert_eq!(resolve(section).section(), section);
    }
    assert!("Billing".parse::<Section>().is_err());
}

#[test]
fn config_file_drives_startup_section_and_endpoint() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("company-manager.yaml");
    std::fs::write(
        &path,
        "client:\n  endpoint: http://127.0.0.1:4100\nnavigation:\n  default_section: people\n",
    )
    .unwrap();

    let (cfg, loaded_from) =
        company_manager::AppConfig::from_file_with_overrides(Some(&path), &ConfigOverrides::default())
            .unwrap();
    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(cfg.navigation.default_section, Section::People);

    let client = GraphQlClient::new(cfg.client.clone()).unwrap();
    assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:4100/");

    let shell = App::new(Arc::new(client), cfg.navigation.default_section);
    assert_eq!(shell.selected(), Section::People);
    assert!(config::generate_json_schema().contains("default_section"));
}
