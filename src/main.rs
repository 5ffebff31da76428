//! Simulated host runtime.
//!
//! Stands in for the wearable's single-threaded event loop: synthesizes
//! minute ticks, battery notifications, and companion traffic, dispatches
//! them into the application core, and prints the face state after each
//! turn. Time runs from the compile-time epoch, one simulated minute per
//! loop turn.

use chrono::{DateTime, Duration};

use watchface_rust::{
    app::App,
    battery::BatteryState,
    clock::ClockSample,
    event::Event,
    msg::{ChannelError, Dict, MessagePort},
    ui::FaceConfig,
    weather::{KEY_CONDITIONS, KEY_TEMPERATURE},
};

// Include compile-time UTC epoch
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// Simulated minutes to run.
const RUN_MINUTES: i64 = 90;

/// Canned companion reports, cycled per refresh request.
const REPORTS: [(i32, &str); 3] = [(72, "Cloudy"), (68, "Sunny"), (54, "Light Rain")];

/// Companion stub on the far end of the message bus: acknowledges sends and
/// leaves a reply pending for the next loop turn. Every third send times
/// out to exercise the failure path.
struct SimPort {
    sends: u32,
    pending_reply: bool,
}

impl MessagePort for SimPort {
    fn send(&mut self, _dict: &Dict) -> Result<(), ChannelError> {
        self.sends += 1;
        if self.sends % 3 == 0 {
            return Err(ChannelError::SendTimeout);
        }
        self.pending_reply = true;
        Ok(())
    }
}

impl SimPort {
    fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending_reply)
    }
}

fn main() {
    let base = DateTime::from_timestamp(UTC_EPOCH, 0)
        .expect("compile-time epoch is valid")
        .naive_utc();

    let mut app = App::new(
        SimPort {
            sends: 0,
            pending_reply: false,
        },
        FaceConfig::default(),
    );
    let mut battery = BatteryState::new(87);
    let mut reply_index = 0usize;

    app.dispatch(Event::WindowLoad {
        clock: ClockSample::from_datetime(&base),
        battery,
    });
    print_face(&app, 0);

    for minute in 1..=RUN_MINUTES {
        let now = base + Duration::minutes(minute);
        app.dispatch(Event::MinuteTick(ClockSample::from_datetime(&now)));

        // The battery drains one point every twenty simulated minutes.
        if minute % 20 == 0 {
            battery = BatteryState::new(battery.percent().saturating_sub(1));
            app.dispatch(Event::BatteryChanged(battery));
        }

        // Companion turn: acknowledge the send, then answer it.
        if app.port_mut().take_pending() {
            app.dispatch(Event::OutboxSent);

            let (temperature, conditions) = REPORTS[reply_index % REPORTS.len()];
            reply_index += 1;

            let mut reply = Dict::new();
            reply.push_int(KEY_TEMPERATURE, temperature).unwrap();
            reply.push_text(KEY_CONDITIONS, conditions).unwrap();
            app.dispatch(Event::InboxReceived(reply));
        }

        // The bus drops one inbound message on the floor mid-run.
        if minute == 45 {
            app.dispatch(Event::InboxDropped(ChannelError::BufferOverflow));
        }

        print_face(&app, minute);
    }

    app.dispatch(Event::WindowUnload);
    println!("t+{:03}m  window unloaded", RUN_MINUTES);
}

fn print_face(app: &App<SimPort>, minute: i64) {
    if let Some(face) = app.face() {
        println!(
            "t+{:03}m  [{}]  {:<10}  {:>5}  {}",
            minute,
            face.time_text(),
            face.date_text().unwrap_or("-"),
            face.battery_text().unwrap_or("-"),
            face.weather_text(),
        );
    }
}
