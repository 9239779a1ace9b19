pub fn render_index(school_name: &str) -> String {
    INDEX_HTML.replace("{{SCHOOL}}", school_name)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{SCHOOL}} 급식 안내</title>
  <style>
    :root {
      --bg-1: #f5f7f2;
      --bg-2: #dce9d5;
      --ink: #27302a;
      --accent: #3f7d4e;
      --accent-soft: rgba(63, 125, 78, 0.12);
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 48px rgba(39, 48, 42, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #eef4ea 70%, #f7faf4 100%);
      color: var(--ink);
      font-family: "Apple SD Gothic Neo", "Malgun Gothic", "Noto Sans KR", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .menu-card {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 22px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.5rem, 3.5vw, 2.1rem);
    }

    .updated {
      margin: 4px 0 0;
      color: #6d756f;
      font-size: 0.9rem;
      min-height: 1.1em;
    }

    .date-picker {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .date-picker input {
      padding: 10px 14px;
      font-size: 1rem;
      border: 1px solid rgba(39, 48, 42, 0.2);
      border-radius: 12px;
      background: white;
      color: var(--ink);
    }

    .date-label {
      font-weight: 600;
      color: var(--accent);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      padding: 12px 14px;
      text-align: left;
      border-bottom: 1px solid rgba(39, 48, 42, 0.1);
      vertical-align: top;
    }

    tbody th {
      width: 84px;
      background: var(--accent-soft);
      border-radius: 10px;
      font-weight: 600;
    }

    td ul {
      margin: 0;
      padding-left: 18px;
      display: grid;
      gap: 4px;
    }

    .placeholder {
      text-align: center;
      color: #80887f;
      padding: 28px 12px;
    }

    .status {
      font-size: 0.92rem;
      color: #6d756f;
      min-height: 1.2em;
    }
  </style>
</head>
<body>
  <main class="menu-card">
    <header>
      <h1>{{SCHOOL}} 급식 안내</h1>
      <p id="menuUpdatedAt" class="updated"></p>
    </header>

    <section class="date-picker">
      <input id="menuDateInput" type="date" aria-label="급식 날짜 선택" />
      <span id="selectedDateLabel" class="date-label"></span>
    </section>

    <table>
      <thead>
        <tr>
          <th scope="col">구분</th>
          <th scope="col">메뉴</th>
        </tr>
      </thead>
      <tbody id="menuTableBody"></tbody>
    </table>

    <div class="status" id="menuMessage"></div>
  </main>

  <script>
    const dateInput = document.getElementById('menuDateInput');
    const dateLabel = document.getElementById('selectedDateLabel');
    const updatedLabel = document.getElementById('menuUpdatedAt');
    const tableBody = document.getElementById('menuTableBody');
    const messageEl = document.getElementById('menuMessage');

    const EMPTY_MEAL = '등록된 메뉴가 없습니다.';
    const LOAD_ERROR = '급식 정보를 불러오는 중 오류가 발생했습니다.';

    let selectedDate = null;

    const setMessage = (text) => {
      messageEl.textContent = text || '';
    };

    const renderPlaceholder = (text) => {
      tableBody.innerHTML = '';
      const row = document.createElement('tr');
      const cell = document.createElement('td');
      cell.colSpan = 2;
      cell.className = 'placeholder';
      cell.textContent = text || '급식 정보가 없습니다.';
      row.appendChild(cell);
      tableBody.appendChild(row);
    };

    const renderDay = (view) => {
      dateLabel.textContent = view.dateLabel;

      if (!view.available) {
        renderPlaceholder(view.placeholder);
        setMessage(view.message);
        return;
      }

      tableBody.innerHTML = '';
      view.meals.forEach((meal) => {
        const row = document.createElement('tr');
        const head = document.createElement('th');
        head.scope = 'row';
        head.textContent = meal.label;

        const cell = document.createElement('td');
        const list = document.createElement('ul');
        const dishes = meal.dishes.length ? meal.dishes : [EMPTY_MEAL];
        dishes.forEach((dish) => {
          const item = document.createElement('li');
          item.textContent = dish;
          list.appendChild(item);
        });
        cell.appendChild(list);

        row.appendChild(head);
        row.appendChild(cell);
        tableBody.appendChild(row);
      });

      setMessage(view.message);
    };

    const selectDate = async (dateKey) => {
      if (!dateKey) {
        return;
      }
      selectedDate = dateKey;
      if (dateInput.value !== dateKey) {
        dateInput.value = dateKey;
      }

      const res = await fetch(`/api/menu/${dateKey}`);
      if (!res.ok) {
        throw new Error(LOAD_ERROR);
      }
      renderDay(await res.json());
    };

    const loadMenu = async () => {
      const res = await fetch('/api/menu', { cache: 'no-store' });
      if (!res.ok) {
        throw new Error(LOAD_ERROR);
      }
      const overview = await res.json();

      updatedLabel.textContent = overview.updatedLabel;

      if (!overview.availableDates.length) {
        renderPlaceholder('');
        setMessage(overview.message);
        return;
      }

      dateInput.min = overview.availableDates[0];
      dateInput.max = overview.availableDates[overview.availableDates.length - 1];
      await selectDate(overview.initialDate);
    };

    dateInput.addEventListener('change', (event) => {
      selectDate(event.target.value).catch(() => {
        renderPlaceholder(LOAD_ERROR);
        setMessage(LOAD_ERROR);
      });
    });

    loadMenu().catch(() => {
      renderPlaceholder(LOAD_ERROR);
      setMessage(LOAD_ERROR);
    });
  </script>
</body>
</html>
"#;
