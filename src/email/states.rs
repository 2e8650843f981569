//! States of the email address grammar and their handlers.

use crate::core::{Action, Context, Verdict};

crate::declare_states! {
    /// Position of the validator within an address.
    pub enum EmailState for char {
        /// Nothing read yet.
        UserBegin,
        /// Inside the user name, last character not a dot.
        UserBody,
        /// Just read a dot in the user name.
        UserDot,
        /// Just read `@`.
        DomainBegin,
        /// Inside the first domain label.
        DomainLabel,
        /// Inside the first domain label, last character a hyphen.
        DomainHyphen,
        /// Just read a dot in the domain.
        LabelBegin,
        /// Inside a later domain label. Input may end here.
        Label,
        /// Inside a later domain label, last character a hyphen.
        LabelHyphen,
    }
}

fn is_user_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl Action<EmailState> for UserBegin {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        if c.is_ascii_alphanumeric() {
            ctx.set_state(UserBody);
            Verdict::Continue
        } else {
            Verdict::Error
        }
    }
}

impl Action<EmailState> for UserBody {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        match *c {
            '.' => ctx.set_state(UserDot),
            '@' => ctx.set_state(DomainBegin),
            c if is_user_char(c) => {}
            _ => return Verdict::Error,
        }
        Verdict::Continue
    }
}

impl Action<EmailState> for UserDot {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        if c.is_ascii_alphanumeric() {
            ctx.set_state(UserBody);
            Verdict::Continue
        } else {
            Verdict::Error
        }
    }
}

impl Action<EmailState> for DomainBegin {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        if c.is_ascii_alphanumeric() {
            ctx.set_state(DomainLabel);
            Verdict::Continue
        } else {
            Verdict::Error
        }
    }
}

impl Action<EmailState> for DomainLabel {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        match *c {
            '.' => ctx.set_state(LabelBegin),
            '-' => ctx.set_state(DomainHyphen),
            c if c.is_ascii_alphanumeric() => {}
            _ => return Verdict::Error,
        }
        Verdict::Continue
    }
}

impl Action<EmailState> for DomainHyphen {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        match *c {
            '-' => Verdict::Continue,
            c if c.is_ascii_alphanumeric() => {
                ctx.set_state(DomainLabel);
                Verdict::Continue
            }
            _ => Verdict::Error,
        }
    }
}

impl Action<EmailState> for LabelBegin {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        if c.is_ascii_alphanumeric() {
            ctx.set_state(Label);
            Verdict::Accept
        } else {
            Verdict::Error
        }
    }
}

impl Action<EmailState> for Label {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        match *c {
            '.' => {
                ctx.set_state(LabelBegin);
                Verdict::Continue
            }
            '-' => {
                ctx.set_state(LabelHyphen);
                Verdict::Continue
            }
            c if c.is_ascii_alphanumeric() => Verdict::Accept,
            _ => Verdict::Error,
        }
    }
}

impl Action<EmailState> for LabelHyphen {
    fn handle(&self, ctx: &mut Context<EmailState>, c: &char) -> Verdict {
        match *c {
            '-' => Verdict::Continue,
            c if c.is_ascii_alphanumeric() => {
                ctx.set_state(Label);
                Verdict::Accept
            }
            _ => Verdict::Error,
        }
    }
}
