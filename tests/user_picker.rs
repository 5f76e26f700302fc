mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{buffer_text, employee, event_channel, next_event, CountingDirectory, GatedDirectory};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use staffpick::directory::{EmployeeDirectory, FailingDirectory, SearchError};
use staffpick::search::{SearchEvent, SearchPhase};
use staffpick::ui::user_picker::{
    FieldLayout, PickerFocus, PickerOptions, PickerOutput, PickerValue, UserPicker,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn picker_with(
    directory: Arc<dyn EmployeeDirectory>,
    options: PickerOptions,
) -> (UserPicker, UnboundedReceiver<SearchEvent>) {
    let (sink, rx) = event_channel();
    (UserPicker::new(options, directory, sink), rx)
}

fn picker(directory: Arc<dyn EmployeeDirectory>) -> (UserPicker, UnboundedReceiver<SearchEvent>) {
    picker_with(directory, PickerOptions::default())
}

async fn search_for(picker: &mut UserPicker, rx: &mut UnboundedReceiver<SearchEvent>, keyword: &str) {
    picker.set_keyword(keyword);
    picker.search();
    let event = next_event(rx).await;
    picker.handle_event(event);
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn screen() -> Rect {
    Rect::new(0, 0, 100, 40)
}

fn field() -> Rect {
    Rect::new(0, 0, 60, 3)
}

fn render_field(picker: &UserPicker) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
    terminal
        .draw(|frame| picker.render_field(frame, frame.area()))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[tokio::test]
async fn confirm_sets_value_and_closes() {
    let (mut picker, mut rx) = picker(CountingDirectory::new());
    picker.open_dialog();
    search_for(&mut picker, &mut rx, "김철수").await;

    let session = picker.dialog().session().unwrap();
    assert_eq!(session.rows.len(), 1);
    assert_eq!(session.selected.as_deref(), Some("1"));

    let output = picker.confirm();
    assert_eq!(
        output,
        Some(PickerOutput::Changed(PickerValue::new("10001", "김철수")))
    );
    assert_eq!(picker.value(), &PickerValue::new("10001", "김철수"));
    assert!(!picker.is_open());
}

#[tokio::test]
async fn hidden_emp_no_is_still_kept() {
    let options = PickerOptions {
        show_emp_no: false,
        ..PickerOptions::default()
    };
    let (mut picker, mut rx) = picker_with(CountingDirectory::new(), options);
    picker.open_dialog();
    search_for(&mut picker, &mut rx, "김철수").await;
    picker.confirm();

    assert_eq!(picker.value().emp_no, "10001");
    let text = render_field(&picker);
    assert!(text.contains("김철수"));
    assert!(!text.contains("10001"));

    picker.set_show_emp_no(true);
    let text = render_field(&picker);
    assert!(text.contains("10001"));
}

#[tokio::test]
async fn controlled_value_only_reports_changes() {
    let (mut picker, mut rx) = picker(CountingDirectory::new());
    let held = PickerValue::new("20001", "박민수");
    picker.set_external_value(Some(held.clone()));

    picker.open_dialog();
    search_for(&mut picker, &mut rx, "김철수").await;
    let output = picker.confirm();

    assert_eq!(
        output,
        Some(PickerOutput::Changed(PickerValue::new("10001", "김철수")))
    );
    assert_eq!(picker.value(), &held);
}

#[tokio::test]
async fn blank_keyword_clears_without_searching() {
    let directory = CountingDirectory::new();
    let (mut picker, mut rx) = picker(directory.clone());
    picker.open_dialog();
    search_for(&mut picker, &mut rx, "개발").await;
    assert_eq!(picker.dialog().session().unwrap().rows.len(), 2);

    picker.set_keyword("   ");
    picker.search();

    let session = picker.dialog().session().unwrap();
    assert!(session.rows.is_empty());
    assert_eq!(session.selected, None);
    assert_eq!(session.phase, SearchPhase::Idle);
    assert_eq!(directory.calls(), 1);
}

#[tokio::test]
async fn failures_are_shown_inline() {
    let directory = Arc::new(FailingDirectory::new(
        Some("서버 오류".to_string()),
        Duration::ZERO,
    ));
    let (mut picker, mut rx) = picker(directory);
    picker.open_dialog();
    search_for(&mut picker, &mut rx, "김").await;

    let session = picker.dialog().session().unwrap();
    assert_eq!(session.phase.error(), Some("서버 오류"));
    assert!(session.rows.is_empty());
    assert_eq!(picker.confirm(), None);
    assert!(picker.is_open());
}

#[tokio::test]
async fn stale_results_are_dropped() {
    let (directory, mut pending) = GatedDirectory::new();
    let (mut picker, mut rx) = picker(directory);
    picker.open_dialog();

    picker.set_keyword("A");
    picker.search();
    let a = pending.recv().await.unwrap();
    picker.set_keyword("B");
    picker.search();
    let b = pending.recv().await.unwrap();

    b.resolve(Ok(vec![employee("b", "B")]));
    picker.handle_event(next_event(&mut rx).await);
    a.resolve(Ok(vec![employee("a", "A")]));
    picker.handle_event(next_event(&mut rx).await);

    let session = picker.dialog().session().unwrap();
    assert_eq!(session.rows.len(), 1);
    assert_eq!(session.rows[0].id, "b");
}

#[tokio::test]
async fn reopening_resets_the_dialog() {
    let (mut picker, mut rx) = picker(CountingDirectory::new());
    picker.open_dialog();
    search_for(&mut picker, &mut rx, "개발").await;
    picker.close_dialog();

    picker.open_dialog();
    let session = picker.dialog().session().unwrap();
    assert_eq!(session.keyword, "");
    assert!(session.rows.is_empty());
    assert_eq!(session.selected, None);
    assert_eq!(session.page, 0);
}

#[tokio::test]
async fn disabled_picker_does_not_open() {
    let options = PickerOptions {
        disabled: true,
        ..PickerOptions::default()
    };
    let (mut picker, _rx) = picker_with(CountingDirectory::new(), options);

    picker.open_dialog();
    assert!(!picker.is_open());

    let layout = FieldLayout::new(field(), true);
    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: layout.trigger.right() - 2,
        row: layout.trigger.y,
        modifiers: KeyModifiers::NONE,
    });
    picker.handle_input(&click, screen(), field());
    assert!(!picker.is_open());
}

#[tokio::test]
async fn trigger_click_opens_dialog() {
    let (mut picker, _rx) = picker(CountingDirectory::new());
    let layout = FieldLayout::new(field(), true);
    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: layout.trigger.right() - 2,
        row: layout.trigger.y,
        modifiers: KeyModifiers::NONE,
    });

    picker.handle_input(&click, screen(), field());
    assert!(picker.is_open());
}

#[tokio::test]
async fn keyboard_search_select_and_confirm() {
    let (mut picker, mut rx) = picker(CountingDirectory::new());
    picker.handle_input(&key(KeyCode::Enter), screen(), field());
    assert!(picker.is_open());

    for ch in "개발".chars() {
        picker.handle_input(&key(KeyCode::Char(ch)), screen(), field());
    }
    picker.handle_input(&key(KeyCode::Enter), screen(), field());
    picker.handle_event(next_event(&mut rx).await);

    picker.handle_input(&key(KeyCode::Tab), screen(), field());
    assert_eq!(
        picker.dialog().session().unwrap().focus,
        PickerFocus::Table
    );
    picker.handle_input(&key(KeyCode::Down), screen(), field());
    let output = picker.handle_input(&key(KeyCode::Enter), screen(), field());

    assert_eq!(
        output,
        Some(PickerOutput::Changed(PickerValue::new("10002", "이영희")))
    );
    assert!(!picker.is_open());
}

#[tokio::test]
async fn escape_closes_without_changing_value() {
    let (mut picker, mut rx) = picker(CountingDirectory::new());
    picker.open_dialog();
    search_for(&mut picker, &mut rx, "김철수").await;

    let output = picker.handle_input(&key(KeyCode::Esc), screen(), field());
    assert_eq!(output, None);
    assert!(!picker.is_open());
    assert!(picker.value().is_empty());
}

#[tokio::test]
async fn results_are_paged() {
    let (directory, mut pending) = GatedDirectory::new();
    let options = PickerOptions {
        page_size: 3,
        ..PickerOptions::default()
    };
    let (mut picker, mut rx) = picker_with(directory, options);
    picker.open_dialog();
    picker.set_keyword("사원");
    picker.search();

    let rows = (1..=7).map(|n| employee(&n.to_string(), "사원")).collect();
    pending.recv().await.unwrap().resolve(Ok(rows));
    picker.handle_event(next_event(&mut rx).await);
    assert_eq!(picker.dialog().session().unwrap().page_count(), 3);

    picker.change_page(1);
    let session = picker.dialog().session().unwrap();
    assert_eq!(session.page, 1);
    let ids: Vec<_> = session.page_rows().map(|(_, row)| row.id.clone()).collect();
    assert_eq!(ids, ["4", "5", "6"]);

    picker.change_page(10);
    assert_eq!(picker.dialog().session().unwrap().page, 2);
}

#[tokio::test]
async fn superseded_failure_does_not_surface() {
    let (directory, mut pending) = GatedDirectory::new();
    let (mut picker, mut rx) = picker(directory);
    picker.open_dialog();

    picker.set_keyword("A");
    picker.search();
    let a = pending.recv().await.unwrap();
    picker.close_dialog();
    picker.open_dialog();

    a.resolve(Err(SearchError::rejected("늦은 오류")));
    picker.handle_event(next_event(&mut rx).await);

    let session = picker.dialog().session().unwrap();
    assert_eq!(session.phase, SearchPhase::Idle);
}
