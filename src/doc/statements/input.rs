/*!
# `INPUT <variable>`

## Purpose
Suspends execution and reads an integer from the terminal.

## Remarks
The prompt is ` ? `. Anything other than an optionally signed
integer prints `INVALID NUMBER` and asks again.

## Example
```text
10 INPUT A
20 PRINT A * 2
RUN
 ? ten
INVALID NUMBER
 ? 10
20
```

*/
