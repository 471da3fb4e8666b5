//! The event router: [`Session::transition`].

use tracing::{debug, info, trace, warn};

use super::messages::{Command, Event};
use super::types::{CaptureLifecycle, Direction, EditOp, FocusZone};
use super::Session;
use crate::models::{CaptureRequest, PacketRecord, StopOutcome};

impl Session {
    /// Apply one event and return the commands it produces.
    ///
    /// Never fails: events that do not apply to the current focus or
    /// lifecycle are dropped without touching the state. After `Exit` every
    /// event is ignored.
    pub fn transition(&mut self, event: Event) -> Vec<Command> {
        if self.exited {
            trace!(?event, "Session exited, ignoring event");
            return Vec::new();
        }

        let commands = match event {
            Event::Navigate(direction) => {
                self.handle_navigate(direction);
                Vec::new()
            }
            Event::CycleFocus(direction) => {
                self.move_focus(direction);
                Vec::new()
            }
            Event::TextEdit(op) => {
                self.handle_text_edit(op);
                Vec::new()
            }
            Event::Confirm => self.handle_confirm(),
            Event::ToggleHelp => {
                if self.focus_zone() != FocusZone::Filter {
                    self.help_expanded = !self.help_expanded;
                }
                Vec::new()
            }
            Event::Scroll(op) => {
                self.scroll(op);
                Vec::new()
            }
            Event::PacketArrived(record) => self.handle_packet(record),
            Event::CaptureStopped(outcome) => self.handle_capture_stopped(outcome),
            Event::Resize { width, height } => {
                self.width = width;
                self.height = height;
                self.clamp_scroll();
                Vec::new()
            }
            Event::Exit => {
                info!("Exit requested");
                self.exited = true;
                vec![Command::Quit]
            }
        };

        if !commands.is_empty() {
            debug!(?commands, "Transition produced commands");
        }
        commands
    }

    fn handle_navigate(&mut self, direction: Direction) {
        // Up/down belong to the text field while it has focus
        if self.focus_zone() == FocusZone::Filter {
            return;
        }
        self.move_focus(direction);
    }

    fn handle_text_edit(&mut self, op: EditOp) {
        if self.focus_zone() != FocusZone::Filter {
            return;
        }
        match op {
            EditOp::Insert(c) => self.filter.insert_char(c),
            EditOp::Backspace => self.filter.backspace(),
            EditOp::Delete => self.filter.delete_char(),
            EditOp::Left => self.filter.move_cursor_left(),
            EditOp::Right => self.filter.move_cursor_right(),
            EditOp::Home => self.filter.move_cursor_home(),
            EditOp::End => self.filter.move_cursor_end(),
        }
    }

    fn handle_confirm(&mut self) -> Vec<Command> {
        match self.focus_zone() {
            FocusZone::Interface(row) => {
                self.toggle_selection(row);
                debug!(selected = ?self.selected, "Selection changed");
                Vec::new()
            }
            FocusZone::Filter => Vec::new(),
            FocusZone::StartStop => self.handle_start_stop(),
            FocusZone::Clear => {
                self.scrollback.clear();
                self.scroll_offset = 0;
                Vec::new()
            }
        }
    }

    fn handle_start_stop(&mut self) -> Vec<Command> {
        match self.lifecycle {
            CaptureLifecycle::Idle => {
                let Some(interface) = self.selected_interface() else {
                    debug!("Start refused, no interface selected");
                    return Vec::new();
                };
                let request = CaptureRequest::new(interface.name.clone(), self.filter.value());
                info!(interface = %request.interface, filter = %request.filter, "Starting capture");

                self.lifecycle = CaptureLifecycle::Recording;
                self.error_log = None;
                self.active_capture = Some(request.clone());
                vec![Command::StartCapture(request)]
            }
            CaptureLifecycle::Recording => {
                info!("Stop requested");
                self.lifecycle = CaptureLifecycle::Stopping;
                vec![Command::RequestStop]
            }
            CaptureLifecycle::Stopping => Vec::new(),
        }
    }

    fn handle_packet(&mut self, record: PacketRecord) -> Vec<Command> {
        if self.lifecycle.is_recording() {
            self.scrollback.push(record.into_line());
            // Scrolled up: keep the same lines in view
            if self.scroll_offset > 0 {
                self.scroll_offset += 1;
                self.clamp_scroll();
            }
        } else {
            trace!("Dropping packet that arrived while idle");
        }
        vec![Command::ReArmPacketListener]
    }

    fn handle_capture_stopped(&mut self, outcome: StopOutcome) -> Vec<Command> {
        if let StopOutcome::Failed(message) = &outcome {
            warn!("Capture ended with error: {}", message);
            self.error_log = Some(message.clone());
        } else {
            info!("Capture stopped");
        }
        self.lifecycle = CaptureLifecycle::Idle;
        self.active_capture = None;
        vec![Command::ReArmStopListener]
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{ScrollOp, ZoneKind};
    use super::*;
    use crate::models::InterfaceDescriptor;

    fn session(names: &[&str]) -> Session {
        Session::new(names.iter().map(|n| InterfaceDescriptor::new(*n)).collect())
    }

    fn focus(session: &mut Session, zone: FocusZone) {
        let target = zone.to_index(session.interfaces().len());
        while session.focus_index() != target {
            session.transition(Event::CycleFocus(Direction::Forward));
        }
    }

    /// Session recording on the first interface.
    fn recording(names: &[&str]) -> Session {
        let mut s = session(names);
        s.transition(Event::Confirm);
        focus(&mut s, FocusZone::StartStop);
        let commands = s.transition(Event::Confirm);
        assert!(matches!(commands.as_slice(), [Command::StartCapture(_)]));
        s
    }

    fn packet(line: &str) -> Event {
        Event::PacketArrived(PacketRecord::new(line))
    }

    // ========================================================================
    // Focus
    // ========================================================================

    #[test]
    fn test_initial_state() {
        let s = session(&["eth0", "lo"]);
        assert_eq!(s.focus_index(), 0);
        assert_eq!(s.selected(), None);
        assert_eq!(s.lifecycle(), CaptureLifecycle::Idle);
        assert!(s.help_expanded());
        assert!(s.scrollback().is_empty());
        assert_eq!(s.filter().value(), "");
    }

    #[test]
    fn test_focus_wraps_both_ends() {
        let mut s = session(&["eth0", "lo"]);
        s.transition(Event::Navigate(Direction::Backward));
        assert_eq!(s.focus_zone(), FocusZone::Clear);
        assert_eq!(s.focus_index(), 4);

        s.transition(Event::Navigate(Direction::Forward));
        assert_eq!(s.focus_index(), 0);
    }

    #[test]
    fn test_focus_stays_in_domain() {
        let mut s = session(&["a", "b", "c"]);
        let count = FocusZone::count(3);
        let moves = [
            Event::Navigate(Direction::Forward),
            Event::CycleFocus(Direction::Backward),
            Event::Navigate(Direction::Backward),
            Event::CycleFocus(Direction::Forward),
            Event::CycleFocus(Direction::Forward),
        ];
        for i in 0..500 {
            s.transition(moves[(i * 7 + i / 3) % moves.len()].clone());
            assert!(s.focus_index() < count);
        }
    }

    #[test]
    fn test_navigate_ignored_on_filter_but_cycle_leaves_it() {
        let mut s = session(&["eth0"]);
        focus(&mut s, FocusZone::Filter);

        s.transition(Event::Navigate(Direction::Forward));
        s.transition(Event::Navigate(Direction::Backward));
        assert_eq!(s.focus_zone(), FocusZone::Filter);

        s.transition(Event::CycleFocus(Direction::Forward));
        assert_eq!(s.focus_zone(), FocusZone::StartStop);
        s.transition(Event::CycleFocus(Direction::Backward));
        s.transition(Event::CycleFocus(Direction::Backward));
        assert_eq!(s.focus_zone(), FocusZone::Interface(0));
    }

    #[test]
    fn test_no_interfaces_still_has_controls() {
        let mut s = session(&[]);
        assert_eq!(s.focus_zone(), FocusZone::Filter);
        assert_eq!(s.focus_zone().kind(), ZoneKind::TextEditable);
        s.transition(Event::CycleFocus(Direction::Forward));
        s.transition(Event::CycleFocus(Direction::Forward));
        s.transition(Event::CycleFocus(Direction::Forward));
        assert_eq!(s.focus_zone(), FocusZone::Filter);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[test]
    fn test_double_confirm_clears_selection() {
        let mut s = session(&["eth0", "lo"]);
        s.transition(Event::Confirm);
        assert_eq!(s.selected(), Some(0));
        s.transition(Event::Confirm);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_selecting_another_row_replaces_selection() {
        let mut s = session(&["eth0", "lo"]);
        s.transition(Event::Confirm);
        s.transition(Event::Navigate(Direction::Forward));
        s.transition(Event::Confirm);
        assert_eq!(s.selected(), Some(1));
        assert_eq!(s.selected_interface().map(|i| i.name.as_str()), Some("lo"));
    }

    // ========================================================================
    // Filter editing
    // ========================================================================

    #[test]
    fn test_text_edit_only_on_filter() {
        let mut s = session(&["eth0"]);
        s.transition(Event::TextEdit(EditOp::Insert('x')));
        assert_eq!(s.filter().value(), "");

        focus(&mut s, FocusZone::Filter);
        for c in "tcp and port 80".chars() {
            s.transition(Event::TextEdit(EditOp::Insert(c)));
        }
        s.transition(Event::TextEdit(EditOp::Backspace));
        s.transition(Event::TextEdit(EditOp::Home));
        s.transition(Event::TextEdit(EditOp::Delete));
        s.transition(Event::TextEdit(EditOp::End));
        s.transition(Event::TextEdit(EditOp::Left));
        s.transition(Event::TextEdit(EditOp::Right));
        assert_eq!(s.filter().value(), "cp and port 8");
    }

    #[test]
    fn test_confirm_and_help_ignored_on_filter() {
        let mut s = session(&["eth0"]);
        focus(&mut s, FocusZone::Filter);
        assert!(s.transition(Event::Confirm).is_empty());
        s.transition(Event::ToggleHelp);
        assert!(s.help_expanded());
        assert_eq!(s.focus_zone(), FocusZone::Filter);
    }

    #[test]
    fn test_toggle_help() {
        let mut s = session(&["eth0"]);
        s.transition(Event::ToggleHelp);
        assert!(!s.help_expanded());
        s.transition(Event::ToggleHelp);
        assert!(s.help_expanded());
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    #[test]
    fn test_start_refused_without_selection() {
        let mut s = session(&["eth0", "lo"]);
        focus(&mut s, FocusZone::StartStop);
        let before = format!("{:?}", s);
        assert!(s.transition(Event::Confirm).is_empty());
        assert_eq!(format!("{:?}", s), before);
    }

    #[test]
    fn test_start_uses_selected_interface_and_filter() {
        let mut s = session(&["eth0", "lo"]);
        s.transition(Event::Navigate(Direction::Forward));
        s.transition(Event::Confirm);
        focus(&mut s, FocusZone::Filter);
        for c in "icmp".chars() {
            s.transition(Event::TextEdit(EditOp::Insert(c)));
        }
        s.transition(Event::CycleFocus(Direction::Forward));

        let commands = s.transition(Event::Confirm);
        assert_eq!(
            commands,
            vec![Command::StartCapture(CaptureRequest::new("lo", "icmp"))]
        );
        assert_eq!(s.lifecycle(), CaptureLifecycle::Recording);
        assert_eq!(s.active_capture(), Some(&CaptureRequest::new("lo", "icmp")));
    }

    #[test]
    fn test_repeated_confirm_yields_one_stop_request() {
        let mut s = recording(&["eth0"]);
        let mut stops = 0;
        for _ in 0..5 {
            stops += s
                .transition(Event::Confirm)
                .iter()
                .filter(|c| **c == Command::RequestStop)
                .count();
        }
        assert_eq!(stops, 1);
        assert_eq!(s.lifecycle(), CaptureLifecycle::Stopping);
        assert!(s.is_recording());
    }

    #[test]
    fn test_capture_stopped_returns_to_idle() {
        let mut s = recording(&["eth0"]);
        s.transition(Event::Confirm);
        let commands = s.transition(Event::CaptureStopped(StopOutcome::Stopped));
        assert_eq!(commands, vec![Command::ReArmStopListener]);
        assert_eq!(s.lifecycle(), CaptureLifecycle::Idle);
        assert_eq!(s.error_log(), None);
        assert_eq!(s.active_capture(), None);
    }

    #[test]
    fn test_failure_goes_to_error_log_and_next_start_clears_it() {
        let mut s = recording(&["eth0"]);
        s.transition(Event::CaptureStopped(StopOutcome::Failed(
            "Invalid filter \"tcp prot\": syntax error".to_string(),
        )));
        assert_eq!(s.lifecycle(), CaptureLifecycle::Idle);
        assert_eq!(s.error_log(), Some("Invalid filter \"tcp prot\": syntax error"));

        let commands = s.transition(Event::Confirm);
        assert!(matches!(commands.as_slice(), [Command::StartCapture(_)]));
        assert_eq!(s.error_log(), None);
    }

    #[test]
    fn test_filter_edit_while_recording_keeps_active_capture() {
        let mut s = recording(&["eth0"]);
        focus(&mut s, FocusZone::Filter);
        s.transition(Event::TextEdit(EditOp::Insert('u')));
        assert_eq!(s.filter().value(), "u");
        assert_eq!(s.active_capture(), Some(&CaptureRequest::new("eth0", "")));
    }

    // ========================================================================
    // Scrollback
    // ========================================================================

    #[test]
    fn test_packets_interleaved_with_input_keep_order() {
        let mut s = recording(&["eth0"]);
        let mut expected = Vec::new();
        for i in 0..20 {
            let line = format!("packet {}", i);
            assert_eq!(s.transition(packet(&line)), vec![Command::ReArmPacketListener]);
            expected.push(line);
            match i % 3 {
                0 => s.transition(Event::Navigate(Direction::Forward)),
                1 => s.transition(Event::TextEdit(EditOp::Insert('x'))),
                _ => s.transition(Event::CycleFocus(Direction::Backward)),
            };
        }
        assert_eq!(s.scrollback(), expected.as_slice());
    }

    #[test]
    fn test_packets_dropped_while_idle_but_rearmed() {
        let mut s = session(&["eth0"]);
        assert_eq!(s.transition(packet("stray")), vec![Command::ReArmPacketListener]);
        assert!(s.scrollback().is_empty());
    }

    #[test]
    fn test_packets_appended_while_stopping() {
        let mut s = recording(&["eth0"]);
        s.transition(Event::Confirm);
        assert_eq!(s.lifecycle(), CaptureLifecycle::Stopping);
        s.transition(packet("late"));
        assert_eq!(s.scrollback(), ["late".to_string()]);
    }

    #[test]
    fn test_clear_in_every_lifecycle() {
        let mut s = recording(&["eth0"]);
        s.transition(packet("a"));
        focus(&mut s, FocusZone::Clear);
        assert!(s.transition(Event::Confirm).is_empty());
        assert!(s.scrollback().is_empty());

        s.transition(packet("b"));
        focus(&mut s, FocusZone::StartStop);
        s.transition(Event::Confirm);
        assert_eq!(s.lifecycle(), CaptureLifecycle::Stopping);
        focus(&mut s, FocusZone::Clear);
        s.transition(Event::Confirm);
        assert!(s.scrollback().is_empty());

        s.transition(Event::CaptureStopped(StopOutcome::Stopped));
        s.transition(packet("c"));
        s.transition(Event::Confirm);
        assert!(s.scrollback().is_empty());
        assert_eq!(s.lifecycle(), CaptureLifecycle::Idle);
    }

    #[test]
    fn test_scrolling_and_anchor() {
        let mut s = recording(&["eth0"]);
        s.transition(Event::Resize { width: 80, height: 12 });
        assert_eq!(s.page_height(), 10);
        for i in 0..30 {
            s.transition(packet(&i.to_string()));
        }
        assert_eq!(s.scroll_offset(), 0);

        s.transition(Event::Scroll(ScrollOp::LineUp));
        assert_eq!(s.scroll_offset(), 1);
        s.transition(Event::Scroll(ScrollOp::PageUp));
        assert_eq!(s.scroll_offset(), 11);

        // New lines keep the viewport on the same content
        s.transition(packet("30"));
        assert_eq!(s.scroll_offset(), 12);

        s.transition(Event::Scroll(ScrollOp::Top));
        assert_eq!(s.scroll_offset(), s.max_scroll_offset());

        s.transition(Event::Scroll(ScrollOp::PageDown));
        s.transition(Event::Scroll(ScrollOp::Bottom));
        assert_eq!(s.scroll_offset(), 0);

        // At the bottom new lines are followed
        s.transition(packet("31"));
        assert_eq!(s.scroll_offset(), 0);
    }

    #[test]
    fn test_resize_stores_geometry_and_clamps() {
        let mut s = recording(&["eth0"]);
        s.transition(Event::Resize { width: 80, height: 7 });
        for i in 0..10 {
            s.transition(packet(&i.to_string()));
        }
        s.transition(Event::Scroll(ScrollOp::Top));
        assert_eq!(s.scroll_offset(), 5);

        s.transition(Event::Resize { width: 100, height: 40 });
        assert_eq!(s.geometry(), (100, 40));
        assert_eq!(s.scroll_offset(), 0);
    }

    // ========================================================================
    // Exit
    // ========================================================================

    #[test]
    fn test_exit_is_terminal() {
        let mut s = recording(&["eth0"]);
        assert_eq!(s.transition(Event::Exit), vec![Command::Quit]);
        assert!(s.has_exited());
        assert!(s.transition(packet("after")).is_empty());
        assert!(s.transition(Event::Confirm).is_empty());
        assert!(s.scrollback().is_empty());
    }

    #[test]
    fn test_walkthrough_start_on_second_interface() {
        let mut s = session(&["eth0", "lo"]);
        s.transition(Event::CycleFocus(Direction::Forward));
        assert_eq!(s.focus_index(), 1);
        s.transition(Event::Confirm);
        assert_eq!(s.selected(), Some(1));
        s.transition(Event::CycleFocus(Direction::Forward));
        s.transition(Event::CycleFocus(Direction::Forward));
        assert_eq!(s.focus_index(), 3);
        assert_eq!(s.focus_zone(), FocusZone::StartStop);

        let commands = s.transition(Event::Confirm);
        assert_eq!(
            commands,
            vec![Command::StartCapture(CaptureRequest::new("lo", ""))]
        );
        assert_eq!(s.lifecycle(), CaptureLifecycle::Recording);
    }
}
