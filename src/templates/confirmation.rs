//! src/templates/confirmation.rs
use super::{escape_html, OWNER_EMAIL, OWNER_NAME, OWNER_TITLE};

const STYLE: &str = r#"
        body {
            font-family: 'Space Grotesk', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: hsl(240, 5%, 10%);
            background-color: hsl(240, 4%, 95%);
            margin: 0;
            padding: 0;
        }
        .container {
            max-width: 600px;
            margin: 0 auto;
            background-color: hsl(0, 0%, 98%);
            border-radius: 1rem;
            overflow: hidden;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }
        .header {
            background: linear-gradient(135deg, hsl(258, 89%, 66%) 0%, hsl(263, 70%, 50%) 100%);
            padding: 2rem;
            text-align: center;
            color: hsl(250, 100%, 97%);
        }
        .header h1 {
            margin: 0;
            font-size: 1.75rem;
            font-weight: 700;
        }
        .content {
            padding: 2rem;
        }
        .message {
            background-color: hsl(269, 100%, 98%);
            border-left: 4px solid hsl(258, 89%, 66%);
            padding: 1.5rem;
            margin: 1.5rem 0;
            border-radius: 0.5rem;
        }
        .highlight {
            color: hsl(258, 89%, 66%);
            font-weight: 600;
        }
        .footer {
            background-color: hsl(240, 5%, 33%);
            color: hsl(0, 0%, 98%);
            padding: 1.5rem;
            text-align: center;
            font-size: 0.875rem;
        }
        .social-links {
            margin-top: 1.5rem;
            text-align: center;
        }
        .social-links a {
            color: hsl(258, 89%, 66%);
            text-decoration: none;
            margin: 0 0.5rem;
        }
"#;

/// The acknowledgement sent back to the visitor.
pub fn render_confirmation(name: &str, subject: &str) -> String {
    let name = escape_html(name);
    let subject = escape_html(subject);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Thank you for reaching out!</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>✨ Thank You!</h1>
        </div>
        <div class="content">
            <p>Hi <strong>{name}</strong>,</p>

            <div class="message">
                <p>Thank you for reaching out! I've received your message regarding <span class="highlight">"{subject}"</span> and I appreciate you taking the time to contact me.</p>

                <p>I'll review your message and get back to you as soon as possible. Typically, I respond within 24-48 hours.</p>

                <p>Looking forward to connecting with you soon!</p>
            </div>

            <p>Best regards,<br>
            <strong>{OWNER_NAME}</strong><br>
            {OWNER_TITLE}</p>

            <div class="social-links">
                <p style="color: hsl(240, 5%, 33%); font-size: 0.875rem; margin-top: 2rem;">
                    Portfolio Contact Form • {OWNER_EMAIL}
                </p>
            </div>
        </div>
        <div class="footer">
            <p>This is an automated confirmation email. Please do not reply to this message.</p>
        </div>
    </div>
</body>
</html>
"#
    )
}
