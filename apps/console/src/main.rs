mod render;

use barbershop_widget::calendar::{self, QuickDate};
use barbershop_widget::{
    api, bridge, catalog, AdminGate, AdminPanel, BookingApi, HostBridge, HttpBookingApi,
    SelectionManager, Service, Theme, WidgetConfig, WidgetError, WidgetView,
};
use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
calendar               show the date picker
date YYYY-MM-DD        pick a date
today | tomorrow       quick date
check <id>             check a service
uncheck <id>           uncheck a service
time HH:MM             pick a start time
confirm                send the booking to the host
slots YYYY-MM-DD [h]   raw availability lookup
admin <password>       open the admin panel
bookings [YYYY-MM-DD]  list bookings (admin)
close                  close the admin panel
help | quit";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Calendar,
    Date(NaiveDate),
    Quick(QuickDate),
    Check(String),
    Uncheck(String),
    Time(String),
    Confirm,
    Slots(NaiveDate, u32),
    Admin(String),
    Bookings(Option<NaiveDate>),
    Close,
    Help,
    Quit,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("bad date: {}", s))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Err(String::new());
    };
    let arg = parts.next();

    let need = |arg: Option<&str>| {
        arg.map(str::to_string)
            .ok_or_else(|| format!("{} needs an argument", cmd))
    };

    match cmd {
        "calendar" => Ok(Command::Calendar),
        "date" => Ok(Command::Date(parse_date(&need(arg)?)?)),
        "today" => Ok(Command::Quick(QuickDate::Today)),
        "tomorrow" => Ok(Command::Quick(QuickDate::Tomorrow)),
        "check" => Ok(Command::Check(need(arg)?)),
        "uncheck" => Ok(Command::Uncheck(need(arg)?)),
        "time" => Ok(Command::Time(need(arg)?)),
        "confirm" => Ok(Command::Confirm),
        "slots" => {
            let date = parse_date(&need(arg)?)?;
            let hours = match parts.next() {
                Some(h) => h.parse().map_err(|_| format!("bad hours: {}", h))?,
                None => api::DEFAULT_DURATION_HOURS,
            };
            Ok(Command::Slots(date, hours))
        }
        "admin" => Ok(Command::Admin(arg.unwrap_or_default().to_string())),
        "bookings" => Ok(Command::Bookings(arg.map(parse_date).transpose()?)),
        "close" => Ok(Command::Close),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {}", other)),
    }
}

/// Host bridge that talks to the terminal.
struct ConsoleBridge;

impl HostBridge for ConsoleBridge {
    fn show_alert(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }

    fn haptic_selection_changed(&mut self) {
        tracing::debug!("haptic: selection changed");
    }

    fn expand(&mut self) {
        tracing::debug!("viewport expanded");
    }

    fn apply_theme(&mut self, theme: &Theme) {
        tracing::debug!("theme applied: bg={} text={}", theme.bg_color, theme.text_color);
    }

    fn send_data(&mut self, data: &str) {
        println!("📤 sendData {}", data);
    }
}

struct Session {
    api: HttpBookingApi,
    catalog: Vec<Service>,
    manager: SelectionManager<ConsoleBridge>,
    admin: AdminPanel,
}

impl Session {
    fn find_service(&self, id: &str) -> Option<Service> {
        catalog::find(&self.catalog, id).cloned()
    }

    fn draw(&self) {
        let view = if self.admin.is_open() {
            WidgetView::admin_only()
        } else {
            WidgetView::project(&self.manager)
        };
        println!("{}", render::widget(&view, &self.catalog));
        if self.admin.is_open() {
            println!("{}", render::bookings(self.admin.listing()));
        }
    }

    /// Returns `false` when the session should end.
    async fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Calendar => {
                let grid = calendar::month_grid(self.manager.today());
                print!("{}", render::calendar(&grid));
                return true;
            }
            Command::Date(date) => {
                if !self.manager.select_date(date) {
                    println!("{} is in the past", date);
                }
            }
            Command::Quick(quick) => {
                self.manager.select_quick_date(quick);
            }
            Command::Check(id) | Command::Uncheck(id) if self.find_service(&id).is_none() => {
                println!("no such service: {}", id);
                return true;
            }
            Command::Check(id) => {
                if let Some(service) = self.find_service(&id) {
                    self.manager
                        .toggle_service_and_refresh(&self.api, service, true)
                        .await;
                }
            }
            Command::Uncheck(id) => {
                if let Some(service) = self.find_service(&id) {
                    self.manager
                        .toggle_service_and_refresh(&self.api, service, false)
                        .await;
                }
            }
            Command::Time(time) => {
                if !self.manager.select_time(&time) {
                    println!("{} is not an offered time", time);
                }
            }
            Command::Confirm => match self.manager.confirm() {
                Ok(_) => println!("booking handed to the host"),
                Err(e @ WidgetError::AlreadyConfirmed) => println!("{}", e.user_message()),
                // Incomplete selections were already alerted through the bridge.
                Err(_) => {}
            },
            Command::Slots(date, hours) => {
                match self.api.available_times(date, hours).await {
                    Ok(times) => println!("{} ({}h): {:?}", date, hours, times),
                    Err(e) => println!("{}", e.user_message()),
                }
                return true;
            }
            Command::Admin(password) => {
                self.admin.open(&password, self.manager.bridge_mut());
            }
            Command::Bookings(date) => {
                if !self.admin.is_open() {
                    println!("admin panel is closed");
                    return true;
                }
                let date = date.or(Some(self.admin.date()));
                self.admin
                    .load_bookings(&self.api, date, self.manager.bridge_mut())
                    .await;
            }
            Command::Close => self.admin.close(),
            Command::Help => {
                println!("{}", HELP);
                return true;
            }
            Command::Quit => return false,
        }
        self.draw();
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = WidgetConfig::from_env()?;
    let catalog = config.services()?;
    let api = HttpBookingApi::new(config.api_base_url.clone(), config.request_timeout)?;

    let mut bridge = ConsoleBridge;
    bridge::init_host(&mut bridge);

    let manager = SelectionManager::new(bridge, config.utc_offset);
    let admin = AdminPanel::new(
        AdminGate::new(config.admin_password.clone()),
        manager.today(),
    );

    tracing::info!(
        "💈 booking widget console, backend {} ({} services)",
        config.api_base_url,
        catalog.len()
    );

    let mut session = Session {
        api,
        catalog,
        manager,
        admin,
    };

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) if msg.is_empty() => continue,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        if !session.handle(command).await {
            break;
        }
    }

    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_command() {
        assert_eq!(
            parse_command("date 2026-10-20"),
            Ok(Command::Date(date(2026, 10, 20)))
        );
    }

    #[test]
    fn test_parse_bad_date() {
        assert!(parse_command("date 20-10-2026").is_err());
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(
            parse_command("check"),
            Err("check needs an argument".to_string())
        );
    }

    #[test]
    fn test_parse_slots_default_duration() {
        assert_eq!(
            parse_command("slots 2026-10-20"),
            Ok(Command::Slots(date(2026, 10, 20), 1))
        );
        assert_eq!(
            parse_command("slots 2026-10-20 3"),
            Ok(Command::Slots(date(2026, 10, 20), 3))
        );
    }

    #[test]
    fn test_parse_bookings_optional_date() {
        assert_eq!(parse_command("bookings"), Ok(Command::Bookings(None)));
        assert_eq!(
            parse_command("bookings 2026-10-21"),
            Ok(Command::Bookings(Some(date(2026, 10, 21))))
        );
    }

    #[test]
    fn test_parse_quick_dates() {
        assert_eq!(parse_command("today"), Ok(Command::Quick(QuickDate::Today)));
        assert_eq!(
            parse_command("  tomorrow  "),
            Ok(Command::Quick(QuickDate::Tomorrow))
        );
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(parse_command("   "), Err(String::new()));
        assert_eq!(
            parse_command("dance"),
            Err("unknown command: dance".to_string())
        );
    }
}
