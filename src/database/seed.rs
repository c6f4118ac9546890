//! Built-in sample events written on first initialization

use crate::models::Event;

/// The catalogue seeded into an empty Event collection
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Annual Technology Conference".to_string(),
            date: "May 15, 2023".to_string(),
            location: "New York, NY".to_string(),
            category: "conference".to_string(),
            image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80".to_string(),
            description: "Join us for a day of inspirational talks, workshops, and networking opportunities with industry leaders.".to_string(),
        },
        Event {
            id: "2".to_string(),
            title: "AI and Ethics Workshop".to_string(),
            date: "June 22, 2023".to_string(),
            location: "San Francisco, CA".to_string(),
            category: "workshop".to_string(),
            image: "https://images.unsplash.com/photo-1543269865-cbf427effbad?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80".to_string(),
            description: "Explore the ethical implications of artificial intelligence in this interactive workshop led by experts.".to_string(),
        },
        Event {
            id: "3".to_string(),
            title: "Future of Engineering Webinar".to_string(),
            date: "July 10, 2023".to_string(),
            location: "Virtual".to_string(),
            category: "webinar".to_string(),
            image: "https://images.unsplash.com/photo-1515187029135-18ee286d815b?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80".to_string(),
            description: "Learn about emerging trends and future directions in engineering from industry experts.".to_string(),
        },
    ]
}
