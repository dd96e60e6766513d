use crate::catalog::MOOD_OPTIONS;

pub fn render_index(date: &str, name: &str) -> String {
    let mut moods = String::new();
    for option in MOOD_OPTIONS {
        moods.push_str(&format!(
            r#"<button type="button" class="mood" data-emoji="{emoji}" title="{label}">
  <span class="mood-emoji">{emoji}</span>
  <span class="mood-label">{label}</span>
</button>
"#,
            emoji = option.emoji,
            label = option.label,
        ));
    }

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{NAME}}", name)
        .replace("{{MOODS}}", &moods)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Snug - Daily Mood Check-in</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f0fa;
      --bg-2: #cfd9f5;
      --ink: #2b2a33;
      --accent: #7c6cf0;
      --accent-soft: #ece8ff;
      --warm: #ff8a65;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(76, 64, 140, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8ecfb 60%, #f6f2fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c6e;
      font-size: 1rem;
    }

    .panel {
      background: #ffffff;
      border-radius: 20px;
      border: 1px solid rgba(124, 108, 240, 0.14);
      padding: 22px;
      display: grid;
      gap: 14px;
    }

    .panel h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .mood-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(96px, 1fr));
      gap: 10px;
    }

    .mood {
      display: grid;
      gap: 4px;
      justify-items: center;
      padding: 12px 6px;
      border: 2px solid transparent;
      border-radius: 16px;
      background: var(--accent-soft);
      cursor: pointer;
      font-family: inherit;
      transition: transform 120ms ease, border-color 120ms ease;
    }

    .mood:hover {
      transform: translateY(-2px);
    }

    .mood.selected {
      border-color: var(--accent);
      background: #fff;
    }

    .mood-emoji {
      font-size: 1.8rem;
    }

    .mood-label {
      font-size: 0.78rem;
      color: #5f5c6e;
    }

    textarea {
      width: 100%;
      min-height: 70px;
      resize: vertical;
      border-radius: 12px;
      border: 1px solid rgba(43, 42, 51, 0.18);
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.95rem;
    }

    .actions {
      display: flex;
      align-items: center;
      gap: 14px;
      flex-wrap: wrap;
    }

    button.primary {
      background: var(--accent);
      color: #fff;
      border: none;
      border-radius: 999px;
      padding: 12px 26px;
      font-size: 1rem;
      font-family: inherit;
      cursor: pointer;
    }

    button.primary:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    .status.ok { color: #2e7d32; }
    .status.error { color: #c62828; }
    .status.info { color: #5f5c6e; }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .metric {
      background: var(--accent-soft);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 4px;
    }

    .metric .value {
      font-size: 1.7rem;
      font-weight: 600;
    }

    .metric .label {
      font-size: 0.82rem;
      color: #5f5c6e;
    }

    .bars {
      display: grid;
      gap: 8px;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 2.2em 1fr 2.5em;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), var(--warm));
    }

    .quotes {
      margin: 0;
      padding-left: 18px;
      display: grid;
      gap: 6px;
      color: #5f5c6e;
      font-size: 0.92rem;
    }

    .chat-log {
      display: grid;
      gap: 8px;
      max-height: 260px;
      overflow-y: auto;
    }

    .bubble {
      padding: 10px 14px;
      border-radius: 16px;
      max-width: 85%;
      font-size: 0.93rem;
      line-height: 1.4;
    }

    .bubble.bot {
      background: var(--accent-soft);
      justify-self: start;
    }

    .bubble.me {
      background: var(--accent);
      color: #fff;
      justify-self: end;
    }

    .chat-form {
      display: flex;
      gap: 10px;
    }

    .chat-form input {
      flex: 1;
      border-radius: 999px;
      border: 1px solid rgba(43, 42, 51, 0.18);
      padding: 10px 16px;
      font-family: inherit;
      font-size: 0.95rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Snug</h1>
      <p class="subtitle">Hey {{NAME}} - how are you feeling on {{DATE}}?</p>
    </header>

    <section class="panel" aria-label="Mood check-in">
      <h2>Today's check-in</h2>
      <div class="mood-grid" id="mood-grid">
{{MOODS}}
      </div>
      <textarea id="note" placeholder="Add a note about your day (optional)"></textarea>
      <div class="actions">
        <button class="primary" id="checkin-btn" type="button">Check in</button>
        <span class="status" id="checkin-status"></span>
      </div>
      <p class="subtitle" id="today-summary"></p>
    </section>

    <section class="panel" aria-label="Streak">
      <h2>Your streak</h2>
      <div class="cards">
        <div class="metric">
          <span class="value" id="streak-count">0</span>
          <span class="label">days in a row</span>
        </div>
      </div>
      <p class="subtitle" id="streak-message"></p>
    </section>

    <section class="panel" aria-label="Community mood">
      <h2>Community mood</h2>
      <div class="cards">
        <div class="metric">
          <span class="value" id="community-total">-</span>
          <span class="label">check-ins today</span>
        </div>
        <div class="metric">
          <span class="value" id="community-average">-</span>
          <span class="label">average sentiment</span>
        </div>
      </div>
      <div class="bars" id="community-bars"></div>
      <ul class="quotes" id="community-quotes"></ul>
    </section>

    <section class="panel" aria-label="Snuggie chat">
      <h2>Talk to Snuggie</h2>
      <div class="chat-log" id="chat-log"></div>
      <form class="chat-form" id="chat-form">
        <input id="chat-input" placeholder="Tell Snuggie how you feel..." autocomplete="off" />
        <button class="primary" type="submit">Send</button>
      </form>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('checkin-status');
    const grid = document.getElementById('mood-grid');
    const noteEl = document.getElementById('note');
    const summaryEl = document.getElementById('today-summary');
    let selected = null;

    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = `status ${kind || ''}`;
    };

    grid.querySelectorAll('.mood').forEach((button) => {
      button.addEventListener('click', () => {
        selected = button.dataset.emoji;
        grid.querySelectorAll('.mood').forEach((other) => {
          other.classList.toggle('selected', other === button);
        });
      });
    });

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderStreak = (streak, message) => {
      document.getElementById('streak-count').textContent = streak;
      document.getElementById('streak-message').textContent = message || '';
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) return;
      const today = await res.json();
      if (today.entry) {
        summaryEl.textContent = `Checked in: ${today.entry.emoji}` +
          (today.entry.note ? ` - "${today.entry.note}"` : '');
      } else {
        summaryEl.textContent = 'No check-in yet today.';
      }
    };

    const loadStreak = async () => {
      const res = await fetch('/api/streak');
      if (!res.ok) return;
      const data = await res.json();
      renderStreak(data.streak, data.message);
    };

    const loadCommunity = async () => {
      const res = await fetch('/api/community');
      if (!res.ok) return;
      const community = await res.json();

      document.getElementById('community-total').textContent = community.totalEntries;
      document.getElementById('community-average').textContent =
        community.averageSentiment.toFixed(2);

      const counts = Object.entries(community.moodCounts).sort((a, b) => b[1] - a[1]);
      const max = counts.length ? counts[0][1] : 1;
      document.getElementById('community-bars').innerHTML = counts
        .map(([emoji, count]) =>
          `<div class="bar-row"><span>${emoji}</span>` +
          `<div class="bar" style="width:${Math.max(6, (count / max) * 100)}%"></div>` +
          `<span>${count}</span></div>`)
        .join('');

      document.getElementById('community-quotes').innerHTML = community.quotes
        .slice()
        .reverse()
        .map((quote) => `<li>${quote.replace(/</g, '&lt;')}</li>`)
        .join('');
    };

    document.getElementById('checkin-btn').addEventListener('click', async () => {
      if (!selected) {
        setStatus('Pick a mood first', 'error');
        return;
      }
      setStatus('Saving...', 'info');
      try {
        const result = await postJson('/api/checkin', {
          emoji: selected,
          note: noteEl.value || null
        });
        renderStreak(result.streak, '');
        setStatus(result.message, 'ok');
        noteEl.value = '';
        await Promise.all([loadToday(), loadStreak(), loadCommunity()]);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const chatLog = document.getElementById('chat-log');
    const chatForm = document.getElementById('chat-form');
    const chatInput = document.getElementById('chat-input');

    const addBubble = (text, who) => {
      const bubble = document.createElement('div');
      bubble.className = `bubble ${who}`;
      bubble.textContent = text;
      chatLog.appendChild(bubble);
      chatLog.scrollTop = chatLog.scrollHeight;
    };

    addBubble("Hi! I'm Snuggie, your emotional support companion. How are you feeling today?", 'bot');

    chatForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const text = chatInput.value.trim();
      if (!text) return;
      addBubble(text, 'me');
      chatInput.value = '';
      try {
        const result = await postJson('/api/chat', { text });
        addBubble(result.reply, 'bot');
      } catch (err) {
        addBubble('Snuggie is having trouble responding right now.', 'bot');
      }
    });

    Promise.all([loadToday(), loadStreak(), loadCommunity()]).catch(() => {
      setStatus('Unable to load data', 'error');
    });
  </script>
</body>
</html>
"#;
