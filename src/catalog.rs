//! The fixed tutorial content, keyed by section.

use crate::content::ContentBlock;
use crate::section::Section;

/// Immutable mapping from [`Section`] to its ordered content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCatalog {
    basic: &'static [ContentBlock],
    intermediate: &'static [ContentBlock],
    advanced: &'static [ContentBlock],
}

impl ContentCatalog {
    pub const fn new(
        basic: &'static [ContentBlock],
        intermediate: &'static [ContentBlock],
        advanced: &'static [ContentBlock],
    ) -> Self {
        ContentCatalog {
            basic,
            intermediate,
            advanced,
        }
    }

    /// The built-in Python tutorial
    pub const fn standard() -> Self {
        ContentCatalog::new(BASIC, INTERMEDIATE, ADVANCED)
    }

    /// Blocks for `section`, in display order
    pub fn blocks_for(&self, section: Section) -> &'static [ContentBlock] {
        match section {
            Section::Basic => self.basic,
            Section::Intermediate => self.intermediate,
            Section::Advanced => self.advanced,
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        ContentCatalog::standard()
    }
}

const PYTHON: &str = "python";

const BASIC: &[ContentBlock] = &[
    ContentBlock::heading("Variables and Data Types"),
    ContentBlock::paragraph(
        "Variables are used to store values. Python has several built-in data types like integers, floats, strings, and booleans.",
    ),
    ContentBlock::code("x = 10\nname = 'Python'\nflag = True", PYTHON),
    ContentBlock::heading("If-Else Statement"),
    ContentBlock::paragraph("Conditional statements allow you to execute code based on conditions."),
    ContentBlock::code(
        r#"if x > 5:
    st.write("x is greater than 5")
else:
    st.write("x is not greater than 5")"#,
        PYTHON,
    ),
    ContentBlock::heading("Loops in Python"),
    ContentBlock::paragraph("Python supports both `for` and `while` loops."),
    ContentBlock::code(
        r#"for i in range(5):
    st.write(f'Iteration {i}')"#,
        PYTHON,
    ),
    ContentBlock::heading("Functions"),
    ContentBlock::paragraph("Functions allow you to organize code into reusable blocks."),
    ContentBlock::code(
        r#"def greet(name):
    return f"Hello, {name}!"

st.write(greet('World'))"#,
        PYTHON,
    ),
];

const INTERMEDIATE: &[ContentBlock] = &[
    ContentBlock::heading("Lists, Tuples, and Dictionaries"),
    ContentBlock::paragraph("These are some of the essential collection types in Python."),
    ContentBlock::code(
        r#"# List
fruits = ['apple', 'banana', 'cherry']
# Tuple (immutable)
coordinates = (10.0, 20.0)
# Dictionary
person = {'name': 'Alice', 'age': 30}"#,
        PYTHON,
    ),
    ContentBlock::heading("Object-Oriented Programming (OOP)"),
    ContentBlock::paragraph(
        "Python is an object-oriented language. Here's an example of a class in Python.",
    ),
    ContentBlock::code(
        r#"class Animal:
    def __init__(self, name, species):
        self.name = name
        self.species = species

    def speak(self):
        return f"{self.name} says hello!"

dog = Animal("Buddy", "Dog")
st.write(dog.speak())"#,
        PYTHON,
    ),
    ContentBlock::heading("File I/O (Input/Output)"),
    ContentBlock::paragraph("Reading and writing files in Python is easy with built-in functions."),
    ContentBlock::code(
        r#"with open('example.txt', 'w') as f:
    f.write('Hello, File I/O in Python!')

with open('example.txt', 'r') as f:
    st.write(f.read())"#,
        PYTHON,
    ),
];

// The async, web API and scraping material renders under Advanced only.
const ADVANCED: &[ContentBlock] = &[
    ContentBlock::heading("Lambda Functions"),
    ContentBlock::paragraph("Lambda functions are anonymous, single-expression functions."),
    ContentBlock::code(
        r#"multiply = lambda x, y: x * y
st.write(multiply(3, 4))"#,
        PYTHON,
    ),
    ContentBlock::heading("List Comprehensions"),
    ContentBlock::paragraph("List comprehensions provide a concise way to create lists."),
    ContentBlock::code(
        r#"squares = [x**2 for x in range(10)]
st.write(squares)"#,
        PYTHON,
    ),
    ContentBlock::heading("Data Visualization with Seaborn"),
    ContentBlock::paragraph(
        "Seaborn is a powerful data visualization library built on top of Matplotlib.",
    ),
    ContentBlock::ChartRequest,
    ContentBlock::heading("Interactive DataFrame"),
    ContentBlock::paragraph("Here's an interactive table displaying a DataFrame:"),
    ContentBlock::DataTable,
    ContentBlock::heading("Asynchronous Programming"),
    ContentBlock::heading("Asyncio Library"),
    ContentBlock::paragraph(
        "Asyncio allows you to write asynchronous code in Python. It helps to improve performance in I/O-bound tasks.\nWe will use the `async` and `await` keywords to write asynchronous code.",
    ),
    ContentBlock::code(
        r#"import asyncio

async def fetch_data():
    print("Fetching data...")
    await asyncio.sleep(2)  # Simulate a delay
    print("Data fetched!")

async def main():
    await fetch_data()

# Run the asynchronous code
asyncio.run(main())"#,
        PYTHON,
    ),
    ContentBlock::heading("Asyncio with Multiple Tasks"),
    ContentBlock::paragraph(
        "You can use asyncio to run multiple asynchronous tasks concurrently. Here's an example of fetching data from multiple sources.",
    ),
    ContentBlock::code(
        r#"async def fetch_data_from_source(source):
    print(f"Fetching from {source}...")
    await asyncio.sleep(random.randint(1, 3))  # Simulate delay
    print(f"Data from {source} fetched!")

async def main():
    sources = ['Source A', 'Source B', 'Source C']
    tasks = [fetch_data_from_source(source) for source in sources]
    await asyncio.gather(*tasks)

asyncio.run(main())"#,
        PYTHON,
    ),
    ContentBlock::heading("Working with Web APIs"),
    ContentBlock::heading("What is an API?"),
    ContentBlock::paragraph(
        "APIs (Application Programming Interfaces) allow different software systems to communicate with each other. Python's `requests` module is a simple way to interact with APIs.",
    ),
    ContentBlock::heading("Fetching Data from a Public API"),
    ContentBlock::paragraph(
        "Let's use a free public API to fetch some data. Here, we'll get random user data from the 'Random User Generator' API.",
    ),
    ContentBlock::code(
        r#"import requests

url = 'https://randomuser.me/api/'
response = requests.get(url)
data = response.json()

st.write(data['results'][0]['name'])
st.write(f"Name: {data['results'][0]['name']['first']} {data['results'][0]['name']['last']}")
st.write(f"Location: {data['results'][0]['location']['city']}")"#,
        PYTHON,
    ),
    ContentBlock::heading("Using Python Requests Module"),
    ContentBlock::paragraph(
        "The `requests` module is used for sending HTTP requests in Python. It supports various HTTP methods such as GET, POST, PUT, and DELETE.",
    ),
    ContentBlock::code(
        r#"import requests

response = requests.get('https://jsonplaceholder.typicode.com/posts')
posts = response.json()

# Display the first 3 posts
for post in posts[:3]:
    st.write(post)"#,
        PYTHON,
    ),
    ContentBlock::heading("Web Scraping with BeautifulSoup"),
    ContentBlock::heading("Installing BeautifulSoup and Requests"),
    ContentBlock::paragraph(
        "Web scraping is the process of extracting data from websites. To scrape web data, you can use the `requests` and `BeautifulSoup` modules.\nFirst, you need to install the necessary packages:",
    ),
    ContentBlock::code("pip install requests beautifulsoup4", "bash"),
];
