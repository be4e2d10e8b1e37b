use std::fmt;

/// Actions that need a signed-in user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatedAction {
    AddFavorite,
    RemoveFavorite,
    ClearFavorites,
    ViewLibrary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    SignInRequired { action: GatedAction },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notification::SignInRequired { action: GatedAction::AddFavorite } =>
                write!(f, "🔒 Please sign in to add games to your library"),
            Notification::SignInRequired { action: GatedAction::RemoveFavorite } =>
                write!(f, "🔒 Please sign in to remove games from your library"),
            Notification::SignInRequired { action: GatedAction::ClearFavorites } =>
                write!(f, "🔒 Please sign in to clear your library"),
            Notification::SignInRequired { action: GatedAction::ViewLibrary } =>
                write!(f, "🔒 Please sign in to view your library"),
        }
    }
}

// Collects notices for the user until the view is ready to show them
pub trait NotificationHandling {
    fn enqueue(&mut self, n: Notification) -> ();
    fn pending(&self) -> &[Notification];
    fn run(&mut self) -> ();
}

pub struct PrintNotifier {
    notifications: Vec<Notification>
}

impl PrintNotifier {
    pub fn new() -> PrintNotifier {
        PrintNotifier { notifications: vec![] }
    }
}

impl Default for PrintNotifier {
    fn default() -> Self {
        PrintNotifier::new()
    }
}

impl NotificationHandling for PrintNotifier {
    fn enqueue(&mut self, n: Notification) -> () {
        self.notifications.push(n);
    }

    fn pending(&self) -> &[Notification] {
        &self.notifications
    }

    fn run(&mut self) -> () {
        for n in self.notifications.drain(..) {
            println!("{}", n);
        }
    }
}
