//! HTML rendering of books and reviews.
//!
//! Text fields are escaped; ids, years and ratings are system-generated
//! numbers and are written as is.

use std::fmt::Write;

use crate::models::{book::Book, review::Review};

use super::ViewState;

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Five stars, `rating` of them filled
pub fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn book_card(book: &Book) -> String {
    let year = book
        .publication_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        r#"<div class="book-card" data-book-id="{id}"><img src="{image}" alt="{title}" class="book-cover"><div class="book-info"><h3 class="book-title">{title}</h3><p class="book-author">{author}</p><p class="book-year">{year}</p></div></div>"#,
        id = book.book_id,
        image = escape_html(&book.image_url),
        title = escape_html(&book.title),
        author = escape_html(&book.author),
        year = year,
    )
}

fn book_grid(books: &[Book]) -> String {
    let mut html = String::from(r#"<div class="book-grid">"#);
    for book in books {
        html.push_str(&book_card(book));
    }
    html.push_str("</div>");
    html
}

pub fn book_list(state: &ViewState<Vec<Book>>) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => r#"<p class="loading">Loading books...</p>"#.to_string(),
        ViewState::Success(books) if books.is_empty() => {
            r#"<p class="empty-state">No books in your library yet.</p>"#.to_string()
        }
        ViewState::Success(books) => book_grid(books),
        ViewState::Error(msg) => format!(
            r#"<p class="empty-state error">Could not load books. {}</p>"#,
            escape_html(msg)
        ),
    }
}

pub fn search_results(state: &ViewState<Vec<Book>>) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => r#"<p class="loading">Searching...</p>"#.to_string(),
        ViewState::Success(books) if books.is_empty() => {
            r#"<p class="no-results">No books found matching your search.</p>"#.to_string()
        }
        ViewState::Success(books) => {
            let noun = if books.len() == 1 { "book" } else { "books" };
            format!(
                r#"<p class="result-count">Found {} {}</p>{}"#,
                books.len(),
                noun,
                book_grid(books)
            )
        }
        ViewState::Error(msg) => format!(
            r#"<p class="error">Search failed. {}</p>"#,
            escape_html(msg)
        ),
    }
}

pub fn review_item(review: &Review) -> String {
    format!(
        r#"<div class="review" data-review-id="{id}"><div class="review-header"><strong class="review-user">{user}</strong><span class="rating" title="{rating}/5">{stars}</span></div><p class="review-text">{comment}</p><small class="review-meta">Book #{book_id} &middot; {date}</small></div>"#,
        id = review.review_id,
        user = escape_html(&review.user),
        rating = review.rating,
        stars = stars(review.rating),
        comment = escape_html(&review.comment),
        book_id = review.book_id,
        date = review.review_date.format("%Y-%m-%d"),
    )
}

pub fn review_list(state: &ViewState<Vec<Review>>) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => r#"<p class="loading">Loading reviews...</p>"#.to_string(),
        ViewState::Success(reviews) if reviews.is_empty() => {
            r#"<p class="empty-state">No reviews yet.</p>"#.to_string()
        }
        ViewState::Success(reviews) => {
            let mut html = String::from(r#"<div class="review-list">"#);
            for review in reviews {
                html.push_str(&review_item(review));
            }
            html.push_str("</div>");
            html
        }
        ViewState::Error(msg) => format!(
            r#"<p class="empty-state error">Could not load reviews. {}</p>"#,
            escape_html(msg)
        ),
    }
}

/// Whole landing page with the shelf and the reviews
pub fn index_page(books: &[Book], reviews: &[Review]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Bookshelf</title></head>\n<body>\n",
    );
    let _ = writeln!(html, "<header><h1>Bookshelf</h1><p>{} books</p></header>", books.len());
    let _ = writeln!(
        html,
        r#"<section id="books"><h2>Library</h2>{}</section>"#,
        book_list(&ViewState::Success(books.to_vec()))
    );
    let _ = writeln!(
        html,
        r#"<section id="reviews"><h2>Reviews</h2>{}</section>"#,
        review_list(&ViewState::Success(reviews.to_vec()))
    );
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(title: &str, author: &str) -> Book {
        Book {
            book_id: 7,
            title: title.to_string(),
            author: author.to_string(),
            publication_year: Some(1965),
            image_url: "https://example.com/cover.jpg".to_string(),
        }
    }

    fn review(user: &str, comment: &str, rating: i64) -> Review {
        Review {
            review_id: 3,
            book_id: 7,
            user: user.to_string(),
            rating,
            comment: comment.to_string(),
            review_date: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("Dune"), "Dune");
    }

    #[test]
    fn test_book_card_escapes_text_only() {
        let html = book_card(&book("<b>Dune</b>", "Frank \"Herbert\""));
        assert!(html.contains("&lt;b&gt;Dune&lt;/b&gt;"));
        assert!(html.contains("Frank &quot;Herbert&quot;"));
        assert!(html.contains(r#"data-book-id="7""#));
        assert!(html.contains("1965"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_book_card_without_year() {
        let mut b = book("Dune", "Herbert");
        b.publication_year = None;
        assert!(book_card(&b).contains("N/A"));
    }

    #[test]
    fn test_list_states() {
        assert_eq!(book_list(&ViewState::Idle), "");
        assert!(book_list(&ViewState::Loading).contains("Loading"));
        assert!(book_list(&ViewState::Success(vec![])).contains("No books"));
        assert!(book_list(&ViewState::Error("<oops>".into())).contains("&lt;oops&gt;"));
        assert!(book_list(&ViewState::Success(vec![book("Dune", "Herbert")])).contains("book-card"));
    }

    #[test]
    fn test_search_results() {
        assert!(search_results(&ViewState::Success(vec![])).contains("No books found"));
        let html = search_results(&ViewState::Success(vec![book("Dune", "Herbert")]));
        assert!(html.contains("Found 1 book<"));
    }

    #[test]
    fn test_review_item() {
        let html = review_item(&review("<ana>", "Great & long", 3));
        assert!(html.contains("&lt;ana&gt;"));
        assert!(html.contains("Great &amp; long"));
        assert!(html.contains("★★★☆☆"));
        assert!(html.contains("2025-03-01"));
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_index_page() {
        let html = index_page(&[book("Dune", "Herbert")], &[review("ana", "Good", 4)]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Dune"));
        assert!(html.contains("★★★★☆"));
    }
}
