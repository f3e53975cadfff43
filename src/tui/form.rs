// Contact form
//
// Edits the four fields in place; submission is handed back to the event
// loop as FormAction::Submit, which posts it to the relay on a task and
// reports the result through ContactForm::finish.

use crate::relay::handlers::ContactRequest;
use crate::relay::ContactSubmission;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Email => 1,
            FormField::Subject => 2,
            FormField::Message => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    None,
    /// Leave the form (focus back to the page)
    Leave,
    Submit(ContactSubmission),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    values: [String; 4],
    focus: FormField,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            values: Default::default(),
            focus: FormField::Name,
            status: FormStatus::Idle,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return FormAction::Leave,
            KeyCode::Char('s') if ctrl => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.shift_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.shift_focus(-1),
            KeyCode::Enter if self.focus == FormField::Message => self.current_mut().push('\n'),
            KeyCode::Enter => self.shift_focus(1),
            KeyCode::Backspace => {
                self.current_mut().pop();
            }
            KeyCode::Char(c) if !ctrl => self.current_mut().push(c),
            _ => {}
        }
        FormAction::None
    }

    /// Validate and mark as sending; a submission already in flight wins
    pub fn submit(&mut self) -> FormAction {
        if self.is_sending() {
            return FormAction::None;
        }
        let [name, email, subject, message] = self.values.clone();
        let request = ContactRequest {
            name: Some(name),
            email: Some(email),
            subject: Some(subject),
            message: Some(message),
        };
        match request.validate() {
            Ok(submission) => {
                self.status = FormStatus::Sending;
                FormAction::Submit(submission)
            }
            Err(e) => {
                self.status = FormStatus::Failed(e.to_string());
                FormAction::None
            }
        }
    }

    /// Apply the relay's answer; a successful send clears the fields
    pub fn finish(&mut self, result: Result<String, String>) {
        self.status = match result {
            Ok(message) => {
                self.values = Default::default();
                self.focus = FormField::Name;
                FormStatus::Sent(message)
            }
            Err(message) => FormStatus::Failed(message),
        };
    }

    fn current_mut(&mut self) -> &mut String {
        &mut self.values[self.focus.index()]
    }

    fn shift_focus(&mut self, delta: isize) {
        let len = FormField::ALL.len() as isize;
        let next = (self.focus.index() as isize + delta).rem_euclid(len);
        self.focus = FormField::ALL[next as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill(form: &mut ContactForm) {
        type_str(form, "Ada");
        form.handle_key(key(KeyCode::Tab));
        type_str(form, "ada@example.com");
        form.handle_key(key(KeyCode::Tab));
        type_str(form, "Hi");
        form.handle_key(key(KeyCode::Tab));
        type_str(form, "line one");
        form.handle_key(key(KeyCode::Enter));
        type_str(form, "line two");
    }

    #[test]
    fn test_typing_and_focus() {
        let mut form = ContactForm::new();
        fill(&mut form);
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.value(FormField::Message), "line one\nline two");
        assert_eq!(form.focus(), FormField::Message);

        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus(), FormField::Name);
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus(), FormField::Message);
    }

    #[test]
    fn test_submit_requires_every_field() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Ada");
        assert_eq!(form.submit(), FormAction::None);
        assert_eq!(
            form.status(),
            &FormStatus::Failed("All fields are required".into())
        );
    }

    #[test]
    fn test_submit_sends_text_as_typed_and_blocks_double_send() {
        let mut form = ContactForm::new();
        fill(&mut form);
        form.handle_key(key(KeyCode::Char(' ')));

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let FormAction::Submit(submission) = form.handle_key(ctrl_s) else {
            panic!("expected a submission");
        };
        assert_eq!(submission.message, "line one\nline two ");
        assert!(form.is_sending());
        assert_eq!(form.handle_key(ctrl_s), FormAction::None);
    }

    #[test]
    fn test_finish_success_clears_fields() {
        let mut form = ContactForm::new();
        fill(&mut form);
        form.submit();
        form.finish(Ok("Email sent successfully".into()));
        assert_eq!(form.value(FormField::Email), "");
        assert_eq!(form.status(), &FormStatus::Sent("Email sent successfully".into()));
    }

    #[test]
    fn test_finish_failure_keeps_fields() {
        let mut form = ContactForm::new();
        fill(&mut form);
        form.submit();
        form.finish(Err("Failed to send email. Please try again.".into()));
        assert_eq!(form.value(FormField::Name), "Ada");
        assert!(matches!(form.status(), FormStatus::Failed(_)));
    }

    #[test]
    fn test_escape_leaves() {
        let mut form = ContactForm::new();
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Leave);
    }
}
