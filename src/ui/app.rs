use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::cli::DemoCommand;
use crate::config::Config;
use crate::directory::{Employee, EmployeeDirectory};
use crate::search::{EventSink, SearchEvent};
use crate::ui::employee_search::{EmployeeSearchModal, SearchModalOutput};
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::notice::{self, NoticeBoard};
use crate::ui::user_picker::{PickerOutput, PickerValue, UserPicker};

const FIELD_WIDTH: u16 = 60;
const FIELD_HEIGHT: u16 = 3;

/// The search dialog demo: a parent screen that opens the dialog and
/// remembers the last confirmed employee.
pub struct SearchDemo {
    modal: EmployeeSearchModal,
    last_selected: Option<Employee>,
}

/// The picker demo. When `held` is set the demo owns the value and feeds
/// it back to the picker (controlled); otherwise the picker keeps its own.
pub struct PickerDemo {
    picker: UserPicker,
    held: Option<PickerValue>,
}

pub enum Demo {
    Search(SearchDemo),
    Picker(PickerDemo),
}

impl SearchDemo {
    pub fn modal(&self) -> &EmployeeSearchModal {
        &self.modal
    }

    pub fn last_selected(&self) -> Option<&Employee> {
        self.last_selected.as_ref()
    }
}

impl PickerDemo {
    pub fn picker(&self) -> &UserPicker {
        &self.picker
    }

    pub fn is_controlled(&self) -> bool {
        self.held.is_some()
    }
}

impl Demo {
    pub fn search(config: &Config, directory: Arc<dyn EmployeeDirectory>, sink: EventSink) -> Self {
        Demo::Search(SearchDemo {
            modal: EmployeeSearchModal::new(config.search.modal_options(), directory, sink),
            last_selected: None,
        })
    }

    pub fn picker(
        config: &Config,
        directory: Arc<dyn EmployeeDirectory>,
        sink: EventSink,
        controlled: bool,
    ) -> Self {
        let initial = config.picker.initial_value();
        let options = config.picker.picker_options();
        let (picker, held) = if controlled {
            let mut picker = UserPicker::new(options, directory, sink);
            picker.set_external_value(Some(initial.clone()));
            (picker, Some(initial))
        } else {
            (UserPicker::with_value(options, initial, directory, sink), None)
        };
        Demo::Picker(PickerDemo { picker, held })
    }

    pub fn from_command(
        command: &DemoCommand,
        config: &Config,
        directory: Arc<dyn EmployeeDirectory>,
        sink: EventSink,
    ) -> Self {
        match command {
            DemoCommand::Search(_) => Self::search(config, directory, sink),
            DemoCommand::Picker(args) => Self::picker(config, directory, sink, !args.uncontrolled),
        }
    }
}

pub struct App {
    should_quit: bool,
    screen: Rect,
    demo: Demo,
    notices: NoticeBoard,
}

impl App {
    pub fn new(demo: Demo, screen: Rect) -> Self {
        Self {
            should_quit: false,
            screen,
            demo,
            notices: NoticeBoard::default(),
        }
    }

    /// Open the search dialog right away; the picker waits for its trigger.
    pub fn start(&mut self) {
        if let Demo::Search(demo) = &mut self.demo {
            demo.modal.open();
        }
    }

    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn notice(&self) -> Option<&str> {
        self.notices.message()
    }

    pub fn title(&self) -> &'static str {
        match self.demo {
            Demo::Search(_) => "사원 검색 데모",
            Demo::Picker(_) => "사용자 선택 데모",
        }
    }

    pub fn hints(&self) -> &'static str {
        match &self.demo {
            Demo::Search(demo) if demo.modal.is_open() => {
                "↑/↓: Move │ Enter: Select │ Esc: Close │ Ctrl+Q: Quit"
            }
            Demo::Search(_) => "Enter: Open search │ Ctrl+Q: Quit",
            Demo::Picker(demo) if demo.picker.is_open() => {
                "Tab: Focus │ Enter: Search/Select │ PgUp/PgDn: Page │ Esc: Close │ Ctrl+Q: Quit"
            }
            Demo::Picker(_) => "Enter: Open picker │ E: Toggle emp no │ D: Toggle disabled │ Ctrl+Q: Quit",
        }
    }

    /// Where the picker field sits on screen.
    pub fn field_area(&self) -> Rect {
        let (_, body, _) = layout_regions(self.screen);
        let centered = centered_rect_by_size(FIELD_WIDTH, FIELD_HEIGHT, body);
        Rect {
            y: body.y + body.height.min(3),
            ..centered
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.notices.expire(now);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.screen = Rect::new(0, 0, cols, rows);
    }

    pub fn on_search_event(&mut self, event: SearchEvent) {
        match &mut self.demo {
            Demo::Search(demo) => demo.modal.handle_event(event),
            Demo::Picker(demo) => demo.picker.handle_event(event),
        }
    }

    pub fn on_input(&mut self, event: &Event) {
        let screen = self.screen;
        let field = self.field_area();

        match &mut self.demo {
            Demo::Search(demo) => {
                if !demo.modal.is_open() {
                    if is_activation(event) {
                        demo.modal.open();
                    }
                    return;
                }
                for output in demo.modal.handle_input(event, screen) {
                    match output {
                        SearchModalOutput::Selected(employee) => {
                            self.notices
                                .show(notice::employee_selected(&employee), Instant::now());
                            demo.last_selected = Some(employee);
                        }
                        SearchModalOutput::CloseRequested => demo.modal.close(),
                    }
                }
            }
            Demo::Picker(demo) => {
                if !demo.picker.is_open() {
                    if let Event::Key(key) = event {
                        if key.kind == KeyEventKind::Press {
                            match key.code {
                                KeyCode::Char('e') => {
                                    let show = !demo.picker.options().show_emp_no;
                                    demo.picker.set_show_emp_no(show);
                                    return;
                                }
                                KeyCode::Char('d') => {
                                    let disabled = !demo.picker.options().disabled;
                                    demo.picker.set_disabled(disabled);
                                    return;
                                }
                                _ => {}
                            }
                        }
                    }
                }
                if let Some(PickerOutput::Changed(value)) =
                    demo.picker.handle_input(event, screen, field)
                {
                    self.notices
                        .show(notice::picker_changed(&value), Instant::now());
                    if demo.held.is_some() {
                        demo.held = Some(value.clone());
                        demo.picker.set_external_value(Some(value));
                    }
                }
            }
        }
    }
}

/// Enter, space, or a left click anywhere.
fn is_activation(event: &Event) -> bool {
    match event {
        Event::Key(key) => {
            key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
        }
        Event::Mouse(mouse) => mouse.kind == MouseEventKind::Down(MouseButton::Left),
        _ => false,
    }
}
