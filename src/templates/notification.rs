//! src/templates/notification.rs
use super::{escape_html, escape_multiline};

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
        .info-section {
            background-color: hsl(269, 100%, 98%);
            border-left: 4px solid hsl(258, 89%, 66%);
            padding: 1.5rem;
            margin: 1.5rem 0;
            border-radius: 0.5rem;
        }
        .info-item {
            margin: 0.75rem 0;
        }
        .info-label {
            font-weight: 600;
            color: hsl(240, 5%, 33%);
            display: inline-block;
            min-width: 80px;
        }
        .info-value {
            color: hsl(240, 5%, 10%);
        }
        .message-box {
            background-color: hsl(240, 4%, 95%);
            border: 1px solid hsl(240, 4%, 83%);
            border-radius: 0.5rem;
            padding: 1.5rem;
            margin: 1.5rem 0;
        }
        .message-box p {
            margin: 0;
            color: hsl(240, 5%, 10%);
            white-space: pre-wrap;
        }
        .footer {
            background-color: hsl(240, 5%, 33%);
            color: hsl(0, 0%, 98%);
            padding: 1.5rem;
            text-align: center;
            font-size: 0.875rem;
        }
        .btn {
            display: inline-block;
            padding: 0.75rem 1.5rem;
            background-color: hsl(258, 89%, 66%);
            color: hsl(250, 100%, 97%);
            text-decoration: none;
            border-radius: 0.5rem;
            margin-top: 1rem;
            font-weight: 600;
        }
        .btn:hover {
            background-color: hsl(258, 89%, 60%);
        }
"#;

/// The email telling the site owner that someone used the contact form.
pub fn render_notification(name: &str, email: &str, subject: &str, message: &str) -> String {
    let name = escape_html(name);
    let email = escape_html(email);
    let subject = escape_html(subject);
    let message = escape_multiline(message);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New Contact Form Submission</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📧 New Contact Form Submission</h1>
        </div>
        <div class="content">
            <p>Someone has reached out through your portfolio contact form!</p>

            <div class="info-section">
                <div class="info-item">
                    <span class="info-label">Name:</span>
                    <span class="info-value"><strong>{name}</strong></span>
                </div>
                <div class="info-item">
                    <span class="info-label">Email:</span>
                    <span class="info-value"><a href="mailto:{email}" style="color: hsl(258, 89%, 66%); text-decoration: none;">{email}</a></span>
                </div>
                <div class="info-item">
                    <span class="info-label">Subject:</span>
                    <span class="info-value">{subject}</span>
                </div>
            </div>

            <div class="message-box">
                <h3 style="margin-top: 0; color: hsl(240, 5%, 33%); font-size: 1rem;">Message:</h3>
                <p>{message}</p>
            </div>

            <p style="text-align: center;">
                <a href="mailto:{email}?subject=Re: {subject}" class="btn">
                    Reply to {name}
                </a>
            </p>
        </div>
        <div class="footer">
            <p>Portfolio Contact Form Notification</p>
        </div>
    </div>
</body>
</html>
"#
    )
}
