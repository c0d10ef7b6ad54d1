use super::person::Person;

/// One standup session: the attendee snapshot plus the person picked from
/// it. `winner` is always an element of `people` -- the selection engine is
/// the only constructor. A standup lives for one session and is never
/// persisted (storing past standups is a future feature).
#[derive(Clone, Debug, PartialEq)]
pub struct Standup {
    pub people: Vec<Person>,
    pub winner: Person,
}
