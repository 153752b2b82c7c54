// Mediator: participants talk through a chat room and never hold references to
// each other. The room owns the routing table (name -> inbox); participants
// hold the room. Names are unique within a room, and dropping a participant
// takes it out of the table.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub text: String,
    /// `false` for broadcasts.
    pub direct: bool,
}

type Inbox = Rc<RefCell<Vec<Message>>>;

#[derive(Debug, Default)]
pub struct ChatRoom {
    members: RefCell<Vec<(String, Inbox)>>,
}

impl ChatRoom {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a participant under `name`. Fails with `NameTaken` while
    /// another participant holds the name.
    pub fn join(self: &Rc<Self>, name: impl Into<String>) -> Result<Participant> {
        let name = name.into();
        let mut members = self.members.borrow_mut();
        if members.iter().any(|(member, _)| *member == name) {
            warn!(participant = %name, "name already taken");
            return Err(PatternError::NameTaken(name));
        }
        let inbox: Inbox = Rc::new(RefCell::new(Vec::new()));
        members.push((name.clone(), inbox.clone()));
        debug!(participant = %name, "joined chat room");
        Ok(Participant {
            name,
            room: Rc::clone(self),
            inbox,
        })
    }

    fn leave(&self, inbox: &Inbox) {
        self.members
            .borrow_mut()
            .retain(|(_, member)| !Rc::ptr_eq(member, inbox));
    }

    pub fn members(&self) -> Vec<String> {
        self.members
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Deliver and return how many inboxes received the message.
    fn route(&self, from: &str, to: Option<&str>, text: &str) -> usize {
        let members = self.members.borrow();
        let mut delivered = 0;
        for (name, inbox) in members.iter() {
            let wanted = match to {
                Some(recipient) => name == recipient,
                None => name != from,
            };
            if wanted {
                inbox.borrow_mut().push(Message {
                    from: from.to_string(),
                    text: text.to_string(),
                    direct: to.is_some(),
                });
                delivered += 1;
            }
        }
        if delivered == 0 {
            if let Some(recipient) = to {
                warn!(from, recipient, "no such participant");
            }
        }
        delivered
    }
}

pub struct Participant {
    name: String,
    room: Rc<ChatRoom>,
    inbox: Inbox,
}

impl Participant {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `to = None` broadcasts to every other member in join order.
    pub fn send(&self, text: &str, to: Option<&str>) -> usize {
        self.room.route(&self.name, to, text)
    }

    pub fn inbox(&self) -> Vec<Message> {
        self.inbox.borrow().clone()
    }
}

impl Drop for Participant {
    fn drop(&mut self) {
        self.room.leave(&self.inbox);
        debug!(participant = %self.name, "left chat room");
    }
}

pub fn demo() -> Vec<String> {
    conversation().unwrap_or_else(|e| vec![format!("error: {}", e)])
}

fn conversation() -> Result<Vec<String>> {
    let room = ChatRoom::new();
    let yoko = room.join("Yoko")?;
    let john = room.join("John")?;
    let paul = room.join("Paul")?;

    yoko.send("All you need is love.", None);
    yoko.send("I love you John.", Some("John"));
    john.send("Hey, no need to broadcast", Some("Yoko"));
    paul.send("Ha, I heard that!", None);

    let mut lines = Vec::new();
    for participant in [&yoko, &john, &paul] {
        for message in participant.inbox() {
            lines.push(format!("{} to {}: {}", message.from, participant.name(), message.text));
        }
    }
    Ok(lines)
}
