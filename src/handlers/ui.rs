// Upload form page. The API is the product; this page is a thin consumer
// that collects the form fields and renders the returned summary.

use axum::{response::Html, routing::get, Router};

pub fn ui_routes() -> Router {
    Router::new().route("/", get(upload_page))
}

pub async fn upload_page() -> Html<String> {
    let html = r##"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>YouTube Upload Agent</title>
        <style>
            body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 760px; margin: 40px auto; padding: 20px; background: #fef2f2; }
            .card { background: white; border-radius: 14px; box-shadow: 0 10px 30px rgba(0,0,0,0.08); padding: 2rem; }
            h1 { color: #b91c1c; margin-top: 0; }
            label { display: block; font-weight: 600; margin: 1rem 0 0.25rem; color: #374151; }
            input, select { width: 100%; padding: 0.6rem; border: 1px solid #d1d5db; border-radius: 8px; box-sizing: border-box; }
            input[type=checkbox] { width: auto; }
            .drop { border: 2px dashed #d1d5db; border-radius: 10px; padding: 2rem; text-align: center; margin-top: 1rem; }
            .drop:hover { border-color: #ef4444; }
            button { margin-top: 1.5rem; width: 100%; padding: 0.9rem; background: #dc2626; color: white; border: none; border-radius: 10px; font-size: 1rem; font-weight: 700; cursor: pointer; }
            button:hover { background: #b91c1c; }
            button:disabled { background: #fca5a5; cursor: wait; }
            #result { margin-top: 1.5rem; padding: 1rem; border-radius: 10px; display: none; white-space: pre-wrap; }
            .ok { background: #ecfdf5; border: 1px solid #34d399; }
            .err { background: #fef2f2; border: 1px solid #f87171; }
        </style>
    </head>
    <body>
        <div class="card">
            <h1>📺 YouTube Upload Agent</h1>
            <p>Upload a video or paste a link; SEO title, description, tags and hashtags are generated for you.</p>

            <form id="uploadForm">
                <label for="token">Access token</label>
                <input type="password" id="token" placeholder="OAuth bearer token from your Google sign-in" required>

                <div class="drop">
                    <input type="file" id="video" accept="video/*">
                </div>

                <label for="videoLink">&hellip;or video link</label>
                <input type="url" id="videoLink" placeholder="https://example.com/video.mp4">

                <label for="category">Category</label>
                <select id="category">
                    <option value="tech">Tech</option>
                    <option value="vlog">Vlog</option>
                    <option value="shorts">Shorts</option>
                    <option value="gaming">Gaming</option>
                    <option value="tutorial">Tutorial</option>
                    <option value="music">Music</option>
                    <option value="education">Education</option>
                </select>

                <label for="language">Language</label>
                <select id="language">
                    <option value="en">English</option>
                    <option value="es">Spanish</option>
                    <option value="fr">French</option>
                    <option value="de">German</option>
                    <option value="ja">Japanese</option>
                    <option value="hi">Hindi</option>
                </select>

                <label><input type="checkbox" id="monetization" checked> Monetization</label>

                <label for="scheduleTime">Schedule (optional)</label>
                <input type="datetime-local" id="scheduleTime">

                <button type="submit" id="submitBtn">Upload to YouTube</button>
            </form>

            <div id="result"></div>
        </div>

        <script>
            const form = document.getElementById('uploadForm');
            const result = document.getElementById('result');
            const submitBtn = document.getElementById('submitBtn');

            form.addEventListener('submit', async (e) => {
                e.preventDefault();
                submitBtn.disabled = true;
                result.style.display = 'none';

                const data = new FormData();
                const file = document.getElementById('video').files[0];
                const link = document.getElementById('videoLink').value;
                if (file) {
                    data.append('video', file);
                } else if (link) {
                    data.append('videoLink', link);
                }
                data.append('category', document.getElementById('category').value);
                data.append('language', document.getElementById('language').value);
                data.append('monetization', String(document.getElementById('monetization').checked));
                const schedule = document.getElementById('scheduleTime').value;
                if (schedule) {
                    data.append('scheduleTime', schedule);
                }

                try {
                    const response = await fetch('/api/upload', {
                        method: 'POST',
                        headers: { 'Authorization': 'Bearer ' + document.getElementById('token').value },
                        body: data
                    });
                    const payload = await response.json();

                    if (!response.ok) {
                        throw new Error(payload.error || 'Upload failed');
                    }

                    result.className = 'ok';
                    result.textContent = '✅ Uploaded!\n'
                        + 'Video ID: ' + payload.videoId + '\n'
                        + 'Title: ' + payload.title + '\n'
                        + 'Hashtags: ' + payload.hashtags + '\n'
                        + 'Tags: ' + payload.tags.join(', ')
                        + (payload.scheduledTime ? '\nScheduled for: ' + payload.scheduledTime : '');
                } catch (err) {
                    result.className = 'err';
                    result.textContent = '❌ ' + err.message;
                } finally {
                    result.style.display = 'block';
                    submitBtn.disabled = false;
                }
            });
        </script>
    </body>
    </html>
    "##;

    Html(html.to_string())
}
